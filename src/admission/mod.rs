//! Connection admission.
//!
//! Decides per request whether traffic reaches the application:
//!
//! - SNI validation compares the server name negotiated during the handshake
//!   with the Host header (`SniPolicy`, `SniGuard`)
//! - DoS filtering counts arrivals per admission key and rejects, throttles
//!   or delays traffic over the limit (`DosFilter`, `DosFilterChain`, `DosGuard`)
//!
//! The negotiated SNI reaches the middlewares through the connection data
//! written by [`admission::record_connection_info`], registered with
//! `HttpServer::on_connect`.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::{App, HttpServer};
//! use rest_utils::admission::admission::record_connection_info;
//! use rest_utils::admission::structs::dos_guard::DosGuard;
//! use rest_utils::admission::structs::sni_guard::SniGuard;
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .wrap(DosGuard::new(chain.clone()))
//!         .wrap(SniGuard::new(policy.clone()))
//! })
//!     .on_connect(record_connection_info)
//!     .bind_rustls_0_23(addr, context.server_config().as_ref().clone())?;
//! ```

/// Admission errors and DoS decisions.
pub mod enums;

/// Policies, rate state, filters, metrics and middleware types.
pub mod structs;

/// Implementations for the admission structs.
pub mod impls;

/// Key extraction and metrics sink seams.
pub mod traits;

/// Connection data hook and host helpers.
#[allow(clippy::module_inception)]
pub mod admission;

/// Unit tests for the admission module.
pub mod tests;
