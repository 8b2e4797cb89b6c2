use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DosAction {
    /// Answer 429 immediately.
    Reject,
    /// Wait for a throttle permit, bounded by the configured maximum wait.
    Throttle,
    /// Sleep, then serve the request.
    Delay(Duration),
}
