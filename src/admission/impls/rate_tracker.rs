use std::time::{Duration, Instant};
use parking_lot::Mutex;
use crate::admission::structs::rate_tracker::RateTracker;
use crate::admission::structs::rate_window::RateWindow;

const RATE_PERIOD: Duration = Duration::from_secs(1);

impl RateTracker {
    pub fn new(max_requests_per_sec: u32, now: Instant) -> RateTracker {
        RateTracker {
            window: Mutex::new(RateWindow {
                slots: vec![None; max_requests_per_sec.max(1) as usize],
                next: 0,
                last_seen: now,
            }),
        }
    }

    /// Records an arrival at `now`. Exceeded when the slot being overwritten
    /// holds an arrival from less than a second ago.
    pub fn is_rate_exceeded(&self, now: Instant) -> bool {
        let mut window = self.window.lock();
        let next = window.next;
        let previous = window.slots[next].replace(now);
        window.next = (next + 1) % window.slots.len();
        window.last_seen = now;
        previous.is_some_and(|at| now.saturating_duration_since(at) < RATE_PERIOD)
    }

    pub fn idle_for(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.window.lock().last_seen)
    }

    pub fn capacity(&self) -> usize {
        self.window.lock().slots.len()
    }
}
