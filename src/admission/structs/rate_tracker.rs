use parking_lot::Mutex;
use crate::admission::structs::rate_window::RateWindow;

/// Remembers the last `max_requests_per_sec` arrivals of one key.
#[derive(Debug)]
pub struct RateTracker {
    pub(crate) window: Mutex<RateWindow>,
}
