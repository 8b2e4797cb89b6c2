/// Display for `StoreRole`.
pub mod store_role;

/// Parsing of the endpoint identification algorithm.
pub mod endpoint_identification;

/// PEM and DER parsing of key stores and trust stores.
pub mod security_store_loader;

/// Set-full and set-path updates of a store configuration.
pub mod security_store;

/// Conversion of key material into a rustls `CertifiedKey`.
pub mod key_material;

pub mod key_generation;

pub mod load_failure_slot;

/// Atomic generation swap on rotation.
pub mod key_store_reloader;

/// `ResolvesServerCert` and `ResolvesClientCert` for the context.
pub mod context_cert_resolver;

/// `ServerCertVerifier` ignoring host name mismatches.
pub mod relaxed_hostname_verifier;

/// Staged context construction.
pub mod tls_context_builder;

/// Accessors, reload, outbound client configuration and shutdown.
pub mod tls_context;
