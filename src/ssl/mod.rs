//! TLS credential lifecycle.
//!
//! Loads key stores and trust stores, turns the `[ssl]` configuration into a
//! rustls server configuration and keeps the server certificate current while
//! the process runs.
//!
//! # Building a context
//!
//! A [`structs::tls_context::TlsContext`] is produced by a staged builder:
//!
//! - `load_stores`: installs the security provider, starts the workload identity
//!   source when SPIFFE is enabled and reads the key store and trust store
//! - `apply_policy`: protocol versions, cipher suites, client authentication
//! - `finish`: assembles the `ServerConfig` and registers the key store watcher
//!
//! Calling a stage out of order fails with `SslError::InvalidState`.
//!
//! # Hot Reload
//!
//! The certificate resolver reads the active key generation through an
//! `ArcSwap`, so new handshakes pick up a rotated certificate without touching
//! the listener. A reload that fails keeps the previous generation serving and
//! records the error, readable through `TlsContext::last_load_failure`.
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_utils::config::structs::ssl_config::SslConfig;
//! use rest_utils::ssl::structs::tls_context::TlsContext;
//!
//! let context = TlsContext::builder(SslConfig::default()).build()?;
//! let server_config = context.server_config();
//! ```

/// Errors, store roles, builder states and certificate sources.
pub mod enums;

/// Stores, key generations, the reloader, resolver and context types.
pub mod structs;

/// Implementations for the SSL structs.
pub mod impls;

/// Protocol version and cipher suite helpers.
#[allow(clippy::module_inception)]
pub mod ssl;

/// Named security provider registry.
pub mod crypto_provider;

/// Self-signed certificate generation.
pub mod cert_gen;
