//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the server configuration
//! from TOML files.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains sections for:
//! - **log_level**: Logging verbosity
//! - **server**: HTTP listener settings (bind address, workers, timeouts)
//! - **ssl**: Key store, trust store, protocol and cipher allow-lists, client
//!   authentication, security provider, FIPS mode and hot reload
//! - **ssl.spiffe**: SPIFFE workload identity
//! - **sni**: SNI versus Host header validation
//! - **dos**: Global, per-connection and per-tenant rate limiting
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_utils::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! config.validate()?;
//! ```

/// Configuration enumerations (store types, client auth, SNI mode, errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Unit tests for configuration.
pub mod tests;
