use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::time::Duration;
use crate::admission::enums::dos_action::DosAction;
use crate::admission::structs::dos_metrics::DosMetrics;
use crate::admission::structs::tenant_rate_limit_state::TenantRateLimitState;
use crate::admission::traits::key_extractor::KeyExtractor;

pub struct DosFilter {
    pub(crate) name: String,
    pub(crate) extractor: Arc<dyn KeyExtractor>,
    pub(crate) state: TenantRateLimitState,
    pub(crate) action: DosAction,
    pub(crate) metrics: DosMetrics,
    pub(crate) checks: AtomicU64,
    pub(crate) idle_eviction: Duration,
}
