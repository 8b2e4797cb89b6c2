use thiserror::Error;
use crate::config::enums::store_type::StoreType;
use crate::identity::enums::identity_error::IdentityError;
use crate::ssl::enums::build_state::BuildState;
use crate::ssl::enums::store_role::StoreRole;
use crate::watcher::enums::watch_error::WatchError;

#[derive(Debug, Error)]
pub enum SslError {
    #[error("The {0} store file was not found: {1}")]
    StoreNotFound(StoreRole, String),
    #[error("Failed to parse certificate: {0}")]
    CertParseError(String),
    #[error("Failed to parse key: {0}")]
    KeyParseError(String),
    #[error("No private key found in {0}")]
    NoKeyFound(String),
    #[error("No certificates found in {0}")]
    NoCertificatesFound(String),
    #[error("Failed to build certified key: {0}")]
    CertifiedKeyError(String),
    #[error("Private key does not belong to the certificate: {0}")]
    KeyMismatch(String),
    #[error("FIPS mode only accepts PEM {0} stores, got {1}")]
    FipsStoreType(StoreRole, StoreType),
    #[error("Unknown security provider: {0}")]
    UnknownProvider(String),
    #[error("Unsupported {0} algorithm: {1}")]
    UnsupportedAlgorithm(StoreRole, String),
    #[error("Invalid TLS configuration: {0}")]
    InvalidConfig(String),
    #[error("Client authentication needs trust anchors: {0}")]
    MissingTrustAnchors(String),
    #[error("Builder is {actual:?}, expected {expected:?}")]
    InvalidState { expected: BuildState, actual: BuildState },
    #[error("Failed to build certificate verifier: {0}")]
    Verifier(String),
    #[error("Certificate generation failed: {0}")]
    CertGen(String),
    #[error("Identity source error: {0}")]
    Identity(#[from] IdentityError),
    #[error("Failed to register key store watcher: {0}")]
    Watch(#[from] WatchError),
    #[error("TLS error: {0}")]
    Rustls(#[from] rustls::Error),
}
