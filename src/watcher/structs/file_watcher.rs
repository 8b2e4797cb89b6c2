use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64};
use std::thread::JoinHandle;
use notify::RecommendedWatcher;
use parking_lot::Mutex;
use crate::watcher::structs::watch_registration::WatchRegistration;

pub struct FileWatcher {
    pub(crate) registration: WatchRegistration,
    pub(crate) stop: Arc<AtomicBool>,
    pub(crate) backend: Mutex<Option<RecommendedWatcher>>,
    pub(crate) thread: Mutex<Option<JoinHandle<()>>>,
    pub(crate) invocations: Arc<AtomicU64>,
}
