use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use actix_web::http::StatusCode;
use log::debug;
use crate::admission::enums::dos_action::DosAction;
use crate::admission::enums::dos_decision::DosDecision;
use crate::admission::structs::admission_request::AdmissionRequest;
use crate::admission::structs::dos_filter::DosFilter;
use crate::admission::structs::dos_metrics::DosMetrics;
use crate::admission::structs::key_extractors::{ConnectionKey, GlobalKey};
use crate::admission::structs::tenant_rate_limit_state::TenantRateLimitState;
use crate::admission::traits::key_extractor::KeyExtractor;
use crate::admission::traits::metrics_sink::MetricsSink;

/// Idle trackers are swept every this many checks.
const EVICTION_CHECK_INTERVAL: u64 = 4096;
const DEFAULT_IDLE_EVICTION: Duration = Duration::from_secs(300);

impl std::fmt::Debug for DosFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DosFilter")
            .field("name", &self.name)
            .field("action", &self.action)
            .field("state", &self.state)
            .finish()
    }
}

impl DosFilter {
    pub fn new(
        name: &str,
        max_requests_per_sec: u32,
        extractor: Arc<dyn KeyExtractor>,
        action: DosAction,
        sink: Option<Arc<dyn MetricsSink>>,
    ) -> DosFilter {
        DosFilter {
            name: name.to_string(),
            extractor,
            state: TenantRateLimitState::new(max_requests_per_sec),
            action,
            metrics: DosMetrics::new(sink, name),
            checks: AtomicU64::new(0),
            idle_eviction: DEFAULT_IDLE_EVICTION,
        }
    }

    pub fn global(max_requests_per_sec: u32, action: DosAction, sink: Option<Arc<dyn MetricsSink>>) -> DosFilter {
        Self::new("global", max_requests_per_sec, Arc::new(GlobalKey), action, sink)
    }

    pub fn per_connection(max_requests_per_sec: u32, action: DosAction, sink: Option<Arc<dyn MetricsSink>>) -> DosFilter {
        Self::new("connection", max_requests_per_sec, Arc::new(ConnectionKey), action, sink)
    }

    pub fn per_tenant(
        max_requests_per_sec: u32,
        extractor: Arc<dyn KeyExtractor>,
        action: DosAction,
        sink: Option<Arc<dyn MetricsSink>>,
    ) -> DosFilter {
        Self::new("tenant", max_requests_per_sec, extractor, action, sink)
    }

    #[must_use]
    pub fn with_idle_eviction(mut self, idle: Duration) -> Self {
        self.idle_eviction = idle;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn action(&self) -> DosAction {
        self.action
    }

    pub fn state(&self) -> &TenantRateLimitState {
        &self.state
    }

    pub fn metrics(&self) -> &DosMetrics {
        &self.metrics
    }

    pub fn check(&self, request: &AdmissionRequest) -> DosDecision {
        self.check_at(request, Instant::now())
    }

    /// Counts the request against its key. Requests without a key are admitted
    /// and not counted.
    pub fn check_at(&self, request: &AdmissionRequest, now: Instant) -> DosDecision {
        let Some(key) = self.extractor.extract(request) else {
            return DosDecision::Admit;
        };
        if self.checks.fetch_add(1, Ordering::Relaxed) % EVICTION_CHECK_INTERVAL == EVICTION_CHECK_INTERVAL - 1 {
            let removed = self.state.evict_idle(now, self.idle_eviction);
            if removed > 0 {
                debug!("[DOS] {} filter evicted {} idle keys", self.name, removed);
            }
        }
        if !self.state.is_rate_exceeded(&key, now) {
            return DosDecision::Admit;
        }

        debug!("[DOS] {} filter over limit for key {}, action {:?}", self.name, key, self.action);
        match self.action {
            DosAction::Reject => {
                self.metrics.record(StatusCode::TOO_MANY_REQUESTS.as_u16());
                DosDecision::Reject
            }
            DosAction::Throttle => DosDecision::Throttle,
            DosAction::Delay(delay) => DosDecision::Delay(delay),
        }
    }
}
