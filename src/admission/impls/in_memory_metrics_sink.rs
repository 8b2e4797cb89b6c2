use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use crate::admission::impls::dos_metrics::{METRIC_COUNT, METRIC_RATE, METRIC_TOTAL, TAG_STATUS};
use crate::admission::structs::in_memory_metrics_sink::InMemoryMetricsSink;
use crate::admission::structs::status_meters::StatusMeters;
use crate::admission::traits::metrics_sink::MetricsSink;

impl MetricsSink for InMemoryMetricsSink {
    fn register(&self, group: &str, tags: &BTreeMap<String, String>, meters: Arc<StatusMeters>) {
        self.registrations.write().push((group.to_string(), tags.clone(), meters));
    }
}

impl InMemoryMetricsSink {
    pub fn new() -> InMemoryMetricsSink {
        InMemoryMetricsSink::default()
    }

    pub fn registrations(&self) -> usize {
        self.registrations.read().len()
    }

    /// Rate, windowed count and total of every registered tag set.
    pub fn samples(&self) -> Vec<(String, BTreeMap<String, String>, f64)> {
        let now = Instant::now();
        let mut samples = Vec::new();
        for (_, tags, meters) in self.registrations.read().iter() {
            samples.push((String::from(METRIC_RATE), tags.clone(), meters.rate_at(now)));
            samples.push((String::from(METRIC_COUNT), tags.clone(), meters.windowed_count_at(now) as f64));
            samples.push((String::from(METRIC_TOTAL), tags.clone(), meters.total() as f64));
        }
        samples
    }

    /// Total events recorded under `status` across every filter.
    pub fn total_for_status(&self, status: u16) -> u64 {
        let status = status.to_string();
        self.registrations
            .read()
            .iter()
            .filter(|(_, tags, _)| tags.get(TAG_STATUS) == Some(&status))
            .map(|(_, _, meters)| meters.total())
            .sum()
    }
}
