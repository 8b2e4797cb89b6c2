/// Maps a request to the key a DoS filter counts it under.
pub mod key_extractor;

/// Receiver of admission metrics.
pub mod metrics_sink;
