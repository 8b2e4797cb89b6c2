use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use ahash::RandomState;
use parking_lot::RwLock;
use crate::admission::structs::rate_tracker::RateTracker;
use crate::admission::structs::tenant_rate_limit_state::{SHARD_COUNT, TenantRateLimitState};

impl std::fmt::Debug for TenantRateLimitState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TenantRateLimitState")
            .field("max_requests_per_sec", &self.max_requests_per_sec)
            .field("keys", &self.len())
            .finish()
    }
}

impl TenantRateLimitState {
    pub fn new(max_requests_per_sec: u32) -> TenantRateLimitState {
        TenantRateLimitState {
            shards: std::array::from_fn(|_| RwLock::new(HashMap::new())),
            hasher: RandomState::new(),
            max_requests_per_sec,
        }
    }

    pub fn max_requests_per_sec(&self) -> u32 {
        self.max_requests_per_sec
    }

    #[inline(always)]
    fn shard_index(&self, key: &str) -> usize {
        (self.hasher.hash_one(key) as usize) % SHARD_COUNT
    }

    /// Tracker for `key`, created on first use.
    pub fn tracker(&self, key: &str, now: Instant) -> Arc<RateTracker> {
        let shard = &self.shards[self.shard_index(key)];
        if let Some(tracker) = shard.read().get(key) {
            return Arc::clone(tracker);
        }
        let mut shard = shard.write();
        Arc::clone(
            shard
                .entry(key.to_string())
                .or_insert_with(|| Arc::new(RateTracker::new(self.max_requests_per_sec, now))),
        )
    }

    pub fn is_rate_exceeded(&self, key: &str, now: Instant) -> bool {
        self.tracker(key, now).is_rate_exceeded(now)
    }

    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.read().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|shard| shard.read().is_empty())
    }

    /// Drops trackers without arrivals for `idle` or longer. Returns how many were removed.
    /// A tracker still held by a caller of `tracker` is kept.
    pub fn evict_idle(&self, now: Instant, idle: Duration) -> usize {
        let mut removed = 0;
        for shard in &self.shards {
            let mut shard = shard.write();
            let before = shard.len();
            shard.retain(|_, tracker| Arc::strong_count(tracker) > 1 || tracker.idle_for(now) < idle);
            removed += before - shard.len();
        }
        removed
    }
}
