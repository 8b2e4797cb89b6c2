use std::sync::atomic::AtomicU64;
use std::time::Instant;
use parking_lot::Mutex;

pub const COUNT_WINDOW_SECS: u64 = 60;

/// One `(second, events)` bucket per second of the count window.
#[derive(Debug)]
pub struct StatusMeters {
    pub(crate) epoch: Instant,
    pub(crate) buckets: Mutex<[(u64, u64); COUNT_WINDOW_SECS as usize]>,
    pub(crate) total: AtomicU64,
}
