use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::RwLock;
use crate::admission::structs::status_meters::StatusMeters;
use crate::admission::traits::metrics_sink::MetricsSink;

/// Without a sink nothing is ever allocated or recorded.
pub struct DosMetrics {
    pub(crate) sink: Option<Arc<dyn MetricsSink>>,
    pub(crate) group: String,
    pub(crate) meters: RwLock<HashMap<u16, Arc<StatusMeters>>>,
}
