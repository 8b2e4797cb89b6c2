/// Loading, saving and validating the root configuration.
pub mod configuration;

/// Display and Error implementations for `ConfigurationError`.
pub mod configuration_error;

/// Defaults for the HTTP listener section.
pub mod http_server_config;

/// Defaults and helpers for the TLS section.
pub mod ssl_config;

/// Defaults for the SPIFFE section.
pub mod spiffe_config;

/// Defaults and helpers for the rate limiting section.
pub mod dos_config;

/// Helpers for configuration enumerations.
pub mod store_type;
pub mod client_auth;
