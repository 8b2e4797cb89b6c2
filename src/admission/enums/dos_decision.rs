use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DosDecision {
    Admit,
    Delay(Duration),
    Throttle,
    Reject,
}
