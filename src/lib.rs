//! # rest-utils
//!
//! TLS credential lifecycle and connection admission for REST servers built on
//! actix-web and rustls.
//!
//! ## Features
//!
//! - **Security stores**: PEM and DER key stores and trust stores, FIPS-restricted provider
//! - **Hot reload**: key store rotation picked up from disk without restarting the listener
//! - **Workload identity**: SPIFFE SVIDs as server certificate and client authentication
//! - **SNI validation**: strict or tenant-prefix matching of SNI against the Host header
//! - **DoS filtering**: global, per-connection and per-tenant rate limits with reject,
//!   throttle or delay actions and optional metrics
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rest_utils::config::structs::configuration::Configuration;
//! use rest_utils::ssl::structs::tls_context::TlsContext;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let context = TlsContext::builder(config.ssl.clone()).build()?;
//! ```
//!
//! ## Modules
//!
//! - [`admission`] - SNI policy, DoS filters, metrics and actix middleware
//! - [`common`] - Error type and logging setup
//! - [`config`] - Configuration management and TOML parsing
//! - [`identity`] - SPIFFE identities, SVID source and peer authorization
//! - [`ssl`] - Security store loading and the live TLS context
//! - [`structs`] - CLI argument parsing
//! - [`watcher`] - File change watching with event coalescing

/// Connection admission module.
///
/// Validates the negotiated SNI against the Host header and applies DoS
/// filters before requests reach the application.
pub mod admission;

/// Common utilities and shared functionality.
///
/// Contains the CLI-level error type and logging setup.
pub mod common;

/// Configuration management module.
///
/// Handles loading, saving and validating the TOML configuration.
pub mod config;

/// Workload identity module.
///
/// Takes SPIFFE SVIDs from the Workload API or from disk, keeps them current
/// and authorizes peers by SPIFFE ID.
pub mod identity;

/// SSL/TLS credential module.
///
/// Loads key stores and trust stores, builds the rustls configuration and
/// reloads the server certificate when the key store changes.
pub mod ssl;

/// CLI argument parsing.
pub mod structs;

/// File watcher module.
///
/// Watches the parent directory of a file and runs a callback once per burst
/// of changes.
pub mod watcher;
