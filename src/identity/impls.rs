/// File based SVID loading and refresh.
pub mod spiffe_identity_source;

/// Workload API connection and SVID caching.
pub mod workload_identity_source;

/// `ClientCertVerifier` for SPIFFE peers.
pub mod spiffe_client_verifier;
