//! Common utilities and shared functionality.
//!
//! This module contains the helpers used by every other module of the crate:
//! the generic error wrapper used at the binary boundary and the logging setup.
//!
//! # Data Structures
//!
//! - `CustomError` - Custom error type
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_utils::common::common::setup_logging;
//! use rest_utils::config::structs::configuration::Configuration;
//!
//! let config = Configuration::init();
//! setup_logging(&config)?;
//! ```

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
