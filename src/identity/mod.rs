//! Workload identity for TLS contexts.
//!
//! An [`IdentitySource`](traits::identity_source::IdentitySource) hands out the
//! current X.509 SVID as a rustls `CertifiedKey` together with the trust bundle
//! of its trust domain. When a TLS context is built with an identity source the
//! server certificate comes from the source only, and client certificates are
//! verified against the bundle and then checked by a `spiffe_rustls`
//! [`Authorizer`](spiffe_rustls::Authorizer).
//!
//! [`WorkloadIdentitySource`](structs::workload_identity_source::WorkloadIdentitySource)
//! keeps a `spiffe::X509Source` connected to the SPIRE agent socket, which
//! pushes rotated SVIDs and bundles. Without a socket,
//! [`SpiffeIdentitySource`](structs::spiffe_identity_source::SpiffeIdentitySource)
//! reads the PEM files a SPIFFE helper keeps up to date in a directory and
//! refreshes itself through file watchers.

/// Identity errors.
pub mod enums;

/// Identity data structures.
pub mod structs;

/// Identity source trait.
pub mod traits;

/// Implementation blocks for identity types.
pub mod impls;

/// SPIFFE ID extraction from certificates.
pub mod identity;

/// Authorizers built from configuration.
pub mod authorizer;
