use std::path::PathBuf;
use rustls::pki_types::{CertificateDer, PrivateKeyDer};

pub struct KeyMaterial {
    pub chain: Vec<CertificateDer<'static>>,
    pub key: PrivateKeyDer<'static>,
    pub source_path: PathBuf,
    pub key_path: PathBuf,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}
