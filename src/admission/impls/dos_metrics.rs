use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Instant;
use log::debug;
use parking_lot::RwLock;
use crate::admission::structs::dos_metrics::DosMetrics;
use crate::admission::structs::status_meters::StatusMeters;
use crate::admission::traits::metrics_sink::MetricsSink;

pub const METRIC_GROUP: &str = "dos-filter";
pub const METRIC_RATE: &str = "dos-filter-rejected-rate";
pub const METRIC_COUNT: &str = "dos-filter-rejected-count";
pub const METRIC_TOTAL: &str = "dos-filter-rejected-total";
pub const TAG_STATUS: &str = "http_status_code";
pub const TAG_FILTER: &str = "filter";

impl DosMetrics {
    pub fn new(sink: Option<Arc<dyn MetricsSink>>, filter: &str) -> DosMetrics {
        DosMetrics {
            sink,
            group: filter.to_string(),
            meters: RwLock::new(HashMap::new()),
        }
    }

    pub fn disabled() -> DosMetrics {
        Self::new(None, "")
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn record(&self, status: u16) {
        let Some(sink) = &self.sink else {
            return;
        };
        self.meters_for(sink, status).record();
    }

    fn meters_for(&self, sink: &Arc<dyn MetricsSink>, status: u16) -> Arc<StatusMeters> {
        if let Some(meters) = self.meters.read().get(&status) {
            return Arc::clone(meters);
        }
        let mut all = self.meters.write();
        if let Some(meters) = all.get(&status) {
            return Arc::clone(meters);
        }
        let meters = Arc::new(StatusMeters::new(Instant::now()));
        let tags = BTreeMap::from([
            (String::from(TAG_FILTER), self.group.clone()),
            (String::from(TAG_STATUS), status.to_string()),
        ]);
        sink.register(METRIC_GROUP, &tags, Arc::clone(&meters));
        all.insert(status, Arc::clone(&meters));
        debug!("[DOS] Registered metrics for {:?}", tags);
        meters
    }

    pub fn meters(&self, status: u16) -> Option<Arc<StatusMeters>> {
        self.meters.read().get(&status).cloned()
    }

    /// Number of tag sets with instantiated meters.
    pub fn instantiated(&self) -> usize {
        self.meters.read().len()
    }
}
