/// Errors raised while building or reloading a TLS context.
pub mod ssl_error;

/// Whether a store holds our own credentials or trust anchors.
pub mod store_role;

/// Material produced by loading a store.
pub mod store_material;

/// Builder progress.
pub mod build_state;

/// Where the server certificate comes from.
pub mod certificate_source;

/// Host name verification policy for outbound connections.
pub mod endpoint_identification;
