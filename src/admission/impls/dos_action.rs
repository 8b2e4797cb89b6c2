use std::time::Duration;
use crate::admission::enums::dos_action::DosAction;

impl DosAction {
    /// Negative rejects, zero throttles, positive delays by that many milliseconds.
    pub fn from_delay_ms(delay_ms: i64) -> DosAction {
        match delay_ms {
            ms if ms < 0 => DosAction::Reject,
            0 => DosAction::Throttle,
            ms => DosAction::Delay(Duration::from_millis(ms.unsigned_abs())),
        }
    }
}
