use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdmissionError {
    #[error("SNI '{sni}' does not match Host '{host}'")]
    SniMismatch { sni: String, host: String },
    #[error("SNI '{sni}' has no tenant prefix")]
    SniWithoutPrefix { sni: String },
    #[error("Rate limit exceeded ({filter} filter)")]
    RateLimited { filter: String },
}
