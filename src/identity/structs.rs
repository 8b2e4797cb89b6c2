/// Identity source backed by SVID files on disk.
pub mod spiffe_identity_source;

/// Identity source backed by the SPIFFE Workload API.
pub mod workload_identity_source;

/// One consistent set of SVID, key and bundle.
pub mod svid_material;

/// Client certificate verifier with SPIFFE authorization.
pub mod spiffe_client_verifier;
