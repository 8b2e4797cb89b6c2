//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// HTTP listener configuration (address, workers, timeouts).
pub mod http_server_config;

/// TLS context configuration.
pub mod ssl_config;

/// A single key store or trust store.
pub mod security_store_config;

/// SPIFFE workload identity settings.
pub mod spiffe_config;

/// SNI validation settings.
pub mod sni_config;

/// Rate limiting settings.
pub mod dos_config;
