use std::sync::Arc;
use std::time::{Duration, Instant};
use log::{debug, info};
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use crate::admission::enums::admission_error::AdmissionError;
use crate::admission::enums::dos_action::DosAction;
use crate::admission::enums::dos_decision::DosDecision;
use crate::admission::structs::admission_request::AdmissionRequest;
use crate::admission::structs::dos_filter::DosFilter;
use crate::admission::structs::dos_filter_chain::DosFilterChain;
use crate::admission::structs::key_extractors::{TenantFromHost, TenantFromPath};
use crate::admission::traits::key_extractor::KeyExtractor;
use crate::admission::traits::metrics_sink::MetricsSink;
use crate::config::enums::tenant_source::TenantSource;
use crate::config::structs::dos_config::DosConfig;

impl std::fmt::Debug for DosFilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DosFilterChain")
            .field("filters", &self.filters)
            .field("throttle_permits", &self.throttle.available_permits())
            .field("max_wait", &self.max_wait)
            .field("max_connection_duration", &self.max_connection_duration)
            .finish()
    }
}

impl DosFilterChain {
    pub fn new(throttled_requests: usize, max_wait: Duration, max_connection_duration: Option<Duration>) -> DosFilterChain {
        DosFilterChain {
            filters: Vec::new(),
            throttle: Arc::new(Semaphore::new(throttled_requests.max(1))),
            max_wait,
            max_connection_duration,
        }
    }

    #[must_use]
    pub fn with_filter(mut self, filter: DosFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn from_config(config: &DosConfig, sink: Option<Arc<dyn MetricsSink>>) -> DosFilterChain {
        let action = DosAction::from_delay_ms(config.delay_ms);
        let idle = config.idle_eviction();
        let mut chain = Self::new(config.throttled_requests, config.max_wait(), config.max_connection_duration());

        if config.enabled {
            chain.filters.push(DosFilter::global(config.global_max_requests_per_sec, action, sink.clone()).with_idle_eviction(idle));
        }
        if config.per_connection_enabled {
            chain.filters.push(
                DosFilter::per_connection(config.per_connection_max_requests_per_sec, action, sink.clone()).with_idle_eviction(idle),
            );
        }
        if config.per_tenant_enabled {
            let extractor: Arc<dyn KeyExtractor> = match config.tenant_source {
                TenantSource::host => Arc::new(TenantFromHost),
                TenantSource::path => Arc::new(TenantFromPath::new(config.tenant_path_segment.as_deref())),
            };
            chain.filters.push(
                DosFilter::per_tenant(config.per_tenant_max_requests_per_sec, extractor, action, sink).with_idle_eviction(idle),
            );
        }

        info!(
            "[DOS] Filters: [{}], action {:?}",
            chain.filters.iter().map(DosFilter::name).collect::<Vec<_>>().join(", "),
            action
        );
        chain
    }

    pub fn filters(&self) -> &[DosFilter] {
        &self.filters
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn check(&self, request: &AdmissionRequest) -> Result<DosDecision, AdmissionError> {
        self.check_at(request, Instant::now())
    }

    /// Runs every filter, stopping at the first rejection. Otherwise the most
    /// severe decision wins.
    pub fn check_at(&self, request: &AdmissionRequest, now: Instant) -> Result<DosDecision, AdmissionError> {
        let mut decision = DosDecision::Admit;
        for filter in &self.filters {
            let outcome = filter.check_at(request, now);
            if outcome == DosDecision::Reject {
                return Err(AdmissionError::RateLimited {
                    filter: filter.name().to_string(),
                });
            }
            if outcome.severity() > decision.severity() {
                decision = outcome;
            }
        }
        Ok(decision)
    }

    /// Waits up to the configured maximum for a throttle permit. `None` means
    /// the wait timed out and the request proceeds without one.
    pub async fn acquire_throttle(&self) -> Option<OwnedSemaphorePermit> {
        match tokio::time::timeout(self.max_wait, Arc::clone(&self.throttle).acquire_owned()).await {
            Ok(Ok(permit)) => Some(permit),
            Ok(Err(_)) => None,
            Err(_) => {
                debug!("[DOS] No throttle permit within {:?}, proceeding", self.max_wait);
                None
            }
        }
    }

    pub fn connection_expired(&self, accepted_at: Instant, now: Instant) -> bool {
        self.max_connection_duration
            .is_some_and(|limit| now.saturating_duration_since(accepted_at) >= limit)
    }

    pub fn evict_idle(&self, idle: Duration) -> usize {
        let now = Instant::now();
        self.filters.iter().map(|filter| filter.state().evict_idle(now, idle)).sum()
    }
}
