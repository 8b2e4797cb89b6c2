/// Request attributes admission decisions are made on.
pub mod admission_request;

/// Connection data recorded when a connection is accepted.
pub mod connection_info;

/// SNI validation policy.
pub mod sni_policy;

/// Arrival ring for a single admission key.
pub mod rate_tracker;

/// Slots and cursor behind a `RateTracker`.
pub mod rate_window;

/// Sharded map from admission key to `RateTracker`.
pub mod tenant_rate_limit_state;

/// Built-in key extractors.
pub mod key_extractors;

/// One rate limit over one kind of admission key.
pub mod dos_filter;

/// All configured DoS filters plus the shared throttle.
pub mod dos_filter_chain;

/// Sliding rate, windowed count and total for one tag set.
pub mod status_meters;

/// Lazily created meters per HTTP status code.
pub mod dos_metrics;

/// Metrics sink keeping registrations in memory.
pub mod in_memory_metrics_sink;

/// Middleware enforcing the SNI policy.
pub mod sni_guard;

/// Middleware enforcing the DoS filter chain.
pub mod dos_guard;
