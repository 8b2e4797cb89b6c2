use std::time::Instant;

#[derive(Debug)]
pub struct RateWindow {
    pub(crate) slots: Vec<Option<Instant>>,
    pub(crate) next: usize,
    pub(crate) last_seen: Instant,
}
