use std::collections::HashMap;
use std::sync::Arc;
use ahash::RandomState;
use parking_lot::RwLock;
use crate::admission::structs::rate_tracker::RateTracker;

pub const SHARD_COUNT: usize = 64;

/// Trackers are spread over `SHARD_COUNT` independently locked shards, picked
/// by hashing the admission key.
pub struct TenantRateLimitState {
    pub(crate) shards: [RwLock<HashMap<String, Arc<RateTracker>>>; SHARD_COUNT],
    pub(crate) hasher: RandomState,
    pub(crate) max_requests_per_sec: u32,
}
