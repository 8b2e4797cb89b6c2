use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use crate::admission::structs::dos_filter::DosFilter;

pub struct DosFilterChain {
    pub(crate) filters: Vec<DosFilter>,
    /// Permits shared by every throttled request.
    pub(crate) throttle: Arc<Semaphore>,
    pub(crate) max_wait: Duration,
    pub(crate) max_connection_duration: Option<Duration>,
}
