use std::sync::Arc;
use rustls::RootCertStore;
use rustls::crypto::CryptoProvider;
use spiffe_rustls::Authorizer;
use crate::identity::traits::identity_source::IdentitySource;

pub struct SpiffeClientVerifier {
    pub(crate) source: Arc<dyn IdentitySource>,
    /// Anchors from a configured trust store, added to the SPIFFE bundle.
    pub(crate) extra_roots: Option<Arc<RootCertStore>>,
    pub(crate) authorizer: Arc<dyn Authorizer>,
    pub(crate) provider: Arc<CryptoProvider>,
    pub(crate) mandatory: bool,
}
