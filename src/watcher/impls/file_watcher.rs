use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc;
use std::time::{Duration, Instant};
use log::{error, info, warn};
use notify::{Event, RecursiveMode, Watcher};
use parking_lot::Mutex;
use crate::watcher::enums::watch_error::WatchError;
use crate::watcher::structs::file_watcher::FileWatcher;
use crate::watcher::structs::watch_registration::WatchRegistration;
use crate::watcher::types::WatchCallback;
use crate::watcher::watcher::watch_loop;

pub const DEFAULT_COALESCE_WINDOW: Duration = Duration::from_millis(250);
pub const SHUTDOWN_JOIN_TIMEOUT: Duration = Duration::from_secs(5);

impl FileWatcher {
    pub fn watch<P: AsRef<Path>>(path: P, callback: WatchCallback) -> Result<FileWatcher, WatchError> {
        Self::watch_with_window(path, DEFAULT_COALESCE_WINDOW, callback)
    }

    pub fn watch_with_window<P: AsRef<Path>>(
        path: P,
        coalesce_window: Duration,
        callback: WatchCallback,
    ) -> Result<FileWatcher, WatchError> {
        let registration = WatchRegistration::new(path.as_ref())?;

        let (sender, receiver) = mpsc::channel::<notify::Result<Event>>();
        let mut backend = notify::recommended_watcher(sender)?;
        backend.watch(&registration.parent_directory, RecursiveMode::NonRecursive)?;

        let stop = Arc::new(AtomicBool::new(false));
        let invocations = Arc::new(AtomicU64::new(0));
        let thread_name = format!(
            "watch-{}",
            registration.watched_path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default()
        );
        let thread = std::thread::Builder::new()
            .name(thread_name)
            .spawn({
                let registration = registration.clone();
                let stop = Arc::clone(&stop);
                let invocations = Arc::clone(&invocations);
                move || watch_loop(registration, receiver, coalesce_window, stop, invocations, callback)
            })
            .map_err(WatchError::Spawn)?;

        info!(
            "[WATCHER] Watching {} (directory {}, coalescing {:?})",
            registration.watched_path.display(),
            registration.parent_directory.display(),
            coalesce_window
        );

        Ok(FileWatcher {
            registration,
            stop,
            backend: Mutex::new(Some(backend)),
            thread: Mutex::new(Some(thread)),
            invocations,
        })
    }

    pub fn registration(&self) -> &WatchRegistration {
        &self.registration
    }

    /// Number of times the callback has run, successful or not.
    pub fn invocations(&self) -> u64 {
        self.invocations.load(Ordering::SeqCst)
    }

    pub fn is_running(&self) -> bool {
        self.thread.lock().as_ref().map(|handle| !handle.is_finished()).unwrap_or(false)
    }

    /// Stops the watch. Safe to call any number of times and from any thread.
    pub fn shutdown(&self) {
        if self.stop.swap(true, Ordering::SeqCst) {
            return;
        }
        drop(self.backend.lock().take());

        let Some(handle) = self.thread.lock().take() else {
            return;
        };
        if handle.thread().id() == std::thread::current().id() {
            // called from the change handler itself, the loop exits on its own
            return;
        }

        let deadline = Instant::now() + SHUTDOWN_JOIN_TIMEOUT;
        while !handle.is_finished() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(10));
        }
        if handle.is_finished() {
            if handle.join().is_err() {
                error!("[WATCHER] Watch thread for {} terminated abnormally", self.registration.watched_path.display());
            }
            info!("[WATCHER] Stopped watching {}", self.registration.watched_path.display());
        } else {
            warn!(
                "[WATCHER] Watch thread for {} did not stop within {:?}, detaching it",
                self.registration.watched_path.display(),
                SHUTDOWN_JOIN_TIMEOUT
            );
        }
    }
}

impl Drop for FileWatcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for FileWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWatcher")
            .field("watched_path", &self.registration.watched_path)
            .field("stopped", &self.stop.load(Ordering::SeqCst))
            .field("invocations", &self.invocations())
            .finish()
    }
}
