use std::collections::BTreeMap;
use std::sync::Arc;
use parking_lot::RwLock;
use crate::admission::structs::status_meters::StatusMeters;

#[derive(Debug, Default)]
pub struct InMemoryMetricsSink {
    pub(crate) registrations: RwLock<Vec<(String, BTreeMap<String, String>, Arc<StatusMeters>)>>,
}
