use std::path::PathBuf;
use std::sync::Arc;
use rustls::sign::CertifiedKey;

pub struct KeyGeneration {
    pub id: u64,
    pub certified_key: Arc<CertifiedKey>,
    pub source_path: PathBuf,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}
