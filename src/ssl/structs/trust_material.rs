use std::path::PathBuf;
use std::sync::Arc;
use rustls::RootCertStore;
use rustls::pki_types::CertificateDer;

#[derive(Debug, Clone)]
pub struct TrustMaterial {
    pub roots: Arc<RootCertStore>,
    pub certificates: Vec<CertificateDer<'static>>,
    pub source_path: PathBuf,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}
