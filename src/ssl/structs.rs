/// Current configuration of one key store or trust store.
pub mod security_store;

/// Reads store files into rustls types.
pub mod security_store_loader;

/// Certificate chain and private key read from a key store.
pub mod key_material;

/// Trust anchors read from a trust store.
pub mod trust_material;

/// One loaded key store, identified by a monotonically increasing id.
pub mod key_generation;

/// Lock-free slot holding the error of the last failed reload.
pub mod load_failure_slot;

/// Reload logic shared by the watcher callback and manual reloads.
pub mod key_store_reloader;

/// Certificate resolver serving the current generation.
pub mod context_cert_resolver;

/// Server certificate verifier that skips host name checks.
pub mod relaxed_hostname_verifier;

/// Protocol, cipher and client authentication policy applied by the builder.
pub mod tls_policy;

/// Live TLS context.
pub mod tls_context;

/// Staged builder producing a `TlsContext`.
pub mod tls_context_builder;

/// Self-signed certificate and key.
pub mod generated_certificate;
