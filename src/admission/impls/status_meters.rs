use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use parking_lot::Mutex;
use crate::admission::structs::status_meters::{COUNT_WINDOW_SECS, StatusMeters};

impl StatusMeters {
    pub fn new(epoch: Instant) -> StatusMeters {
        StatusMeters {
            epoch,
            buckets: Mutex::new([(u64::MAX, 0); COUNT_WINDOW_SECS as usize]),
            total: AtomicU64::new(0),
        }
    }

    fn second(&self, now: Instant) -> u64 {
        now.saturating_duration_since(self.epoch).as_secs()
    }

    pub fn record(&self) {
        self.record_at(Instant::now());
    }

    pub fn record_at(&self, now: Instant) {
        let second = self.second(now);
        let mut buckets = self.buckets.lock();
        let bucket = &mut buckets[(second % COUNT_WINDOW_SECS) as usize];
        if bucket.0 != second {
            *bucket = (second, 0);
        }
        bucket.1 += 1;
        self.total.fetch_add(1, Ordering::Relaxed);
    }

    fn count_in(&self, second: u64) -> u64 {
        let bucket = self.buckets.lock()[(second % COUNT_WINDOW_SECS) as usize];
        if bucket.0 == second { bucket.1 } else { 0 }
    }

    /// Events per second over the last second, the previous second weighted by
    /// how much of it still falls inside the window.
    pub fn rate_at(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.epoch);
        let second = elapsed.as_secs();
        let current = self.count_in(second) as f64;
        if second == 0 {
            return current;
        }
        let remaining = 1.0 - f64::from(elapsed.subsec_millis()) / 1000.0;
        current + self.count_in(second - 1) as f64 * remaining
    }

    pub fn rate(&self) -> f64 {
        self.rate_at(Instant::now())
    }

    /// Events over the last `COUNT_WINDOW_SECS` seconds.
    pub fn windowed_count_at(&self, now: Instant) -> u64 {
        let second = self.second(now);
        self.buckets
            .lock()
            .iter()
            .filter(|(at, _)| *at <= second && second - *at < COUNT_WINDOW_SECS)
            .map(|(_, count)| count)
            .sum()
    }

    pub fn windowed_count(&self) -> u64 {
        self.windowed_count_at(Instant::now())
    }

    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }
}
