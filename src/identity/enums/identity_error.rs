use thiserror::Error;
use crate::watcher::enums::watch_error::WatchError;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("SVID directory not found: {0}")]
    DirectoryNotFound(String),
    #[error("Workload API socket not found: {0}")]
    SocketNotFound(String),
    #[error("Failed to read {0}: {1}")]
    Read(String, String),
    #[error("No X.509 SVID found in {0}")]
    NoSvid(String),
    #[error("No private key found in {0}")]
    NoKey(String),
    #[error("Trust bundle {0} contains no usable certificates")]
    EmptyBundle(String),
    #[error("Invalid SPIFFE ID '{0}': {1}")]
    InvalidSpiffeId(String, String),
    #[error("Certificate carries no SPIFFE ID")]
    MissingSpiffeId,
    #[error("Certificate parse error: {0}")]
    Certificate(String),
    #[error("Signing key error: {0}")]
    SigningKey(String),
    #[error("SVID private key {0} does not belong to the certificate")]
    KeyMismatch(String),
    #[error("Workload API error: {0}")]
    WorkloadApi(String),
    #[error("Failed to watch SVID files: {0}")]
    Watch(#[from] WatchError),
}
