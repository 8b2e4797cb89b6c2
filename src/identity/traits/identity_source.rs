use std::sync::Arc;
use rustls::RootCertStore;
use rustls::sign::CertifiedKey;
use spiffe_rustls::SpiffeId;

pub trait IdentitySource: Send + Sync {
    /// Current SVID, `None` when the source has nothing to offer right now.
    fn certified_key(&self) -> Option<Arc<CertifiedKey>>;

    fn trust_bundle(&self) -> Arc<RootCertStore>;

    fn spiffe_id(&self) -> Option<SpiffeId>;

    fn shutdown(&self) {}
}
