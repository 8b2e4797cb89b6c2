use std::collections::BTreeMap;
use std::sync::Arc;
use crate::admission::structs::status_meters::StatusMeters;

/// Called once per distinct tag set, the first time it records an event.
/// The sink reads the meters whenever it publishes.
#[cfg_attr(test, mockall::automock)]
pub trait MetricsSink: Send + Sync {
    fn register(&self, group: &str, tags: &BTreeMap<String, String>, meters: Arc<StatusMeters>);
}
