pub mod admission_error;
pub mod dos_action;
pub mod dos_decision;
pub mod admission_request;
pub mod sni_policy;
pub mod rate_tracker;
pub mod tenant_rate_limit_state;
pub mod key_extractors;
pub mod status_meters;
pub mod dos_metrics;
pub mod in_memory_metrics_sink;
pub mod dos_filter;
pub mod dos_filter_chain;
pub mod sni_guard;
pub mod dos_guard;
