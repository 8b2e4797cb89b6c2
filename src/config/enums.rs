/// Errors raised while loading or validating the configuration.
pub mod configuration_error;

/// Encoding of a key store or trust store.
pub mod store_type;

/// Client certificate policy.
pub mod client_auth;

/// SNI validation mode.
pub mod sni_mode;

/// Where per-tenant rate limiting reads the tenant from.
pub mod tenant_source;
