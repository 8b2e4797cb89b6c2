use std::sync::Arc;
use rustls::RootCertStore;
use rustls::sign::CertifiedKey;
use spiffe_rustls::SpiffeId;

pub struct SvidMaterial {
    pub certified_key: Arc<CertifiedKey>,
    pub bundle: Arc<RootCertStore>,
    pub spiffe_id: SpiffeId,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}
