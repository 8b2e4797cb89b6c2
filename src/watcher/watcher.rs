use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};
use log::{debug, error, trace, warn};
use notify::{Event, EventKind};
use crate::watcher::structs::watch_registration::WatchRegistration;
use crate::watcher::types::WatchCallback;

/// How often an idle watch thread checks its stop flag.
pub const STOP_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub(crate) fn watch_loop(
    registration: WatchRegistration,
    events: Receiver<notify::Result<Event>>,
    coalesce_window: Duration,
    stop: Arc<AtomicBool>,
    invocations: Arc<AtomicU64>,
    mut callback: WatchCallback,
) {
    let watched = registration.watched_path.display().to_string();
    loop {
        if stop.load(Ordering::SeqCst) {
            break;
        }
        let first = match events.recv_timeout(STOP_POLL_INTERVAL) {
            Ok(event) => event,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => {
                if !stop.load(Ordering::SeqCst) {
                    error!("[WATCHER] Watch service for {} closed unexpectedly, changes to this file are no longer picked up", watched);
                }
                break;
            }
        };

        let mut batch = vec![first];
        let deadline = Instant::now() + coalesce_window;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            match events.recv_timeout(remaining) {
                Ok(event) => batch.push(event),
                Err(_) => break,
            }
        }

        if stop.load(Ordering::SeqCst) {
            break;
        }
        if !batch_is_relevant(&registration, &batch) {
            trace!("[WATCHER] Ignoring {} unrelated events for {}", batch.len(), watched);
            continue;
        }
        if !registration.watched_path.exists() {
            debug!("[WATCHER] {} changed but does not exist right now, waiting for the next event", watched);
            continue;
        }

        debug!("[WATCHER] {} changed ({} events coalesced)", watched, batch.len());
        match panic::catch_unwind(AssertUnwindSafe(|| callback())) {
            Ok(Ok(())) => {}
            Ok(Err(e)) => error!("[WATCHER] Change handler for {} failed: {}", watched, e),
            Err(_) => error!("[WATCHER] Change handler for {} panicked", watched),
        }
        invocations.fetch_add(1, Ordering::SeqCst);
    }
    debug!("[WATCHER] Watch loop for {} exited", watched);
}

/// True when any event of the batch may concern the watched file.
pub fn batch_is_relevant(registration: &WatchRegistration, batch: &[notify::Result<Event>]) -> bool {
    let target_is_symlink = registration.target_is_symlink();
    batch.iter().any(|result| match result {
        Ok(event) => event_is_relevant(registration, event, target_is_symlink),
        Err(e) => {
            warn!("[WATCHER] Watch error on {}: {}", registration.watched_path.display(), e);
            false
        }
    })
}

pub fn event_is_relevant(registration: &WatchRegistration, event: &Event, target_is_symlink: bool) -> bool {
    if event.need_rescan() {
        return true;
    }
    if !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_) | EventKind::Any | EventKind::Other) {
        return false;
    }
    event.paths.iter().any(|path| path_is_relevant(registration, path, target_is_symlink))
}

fn path_is_relevant(registration: &WatchRegistration, path: &Path, target_is_symlink: bool) -> bool {
    if path == registration.watched_path {
        return true;
    }
    if path.file_name().is_some() && path.file_name() == registration.watched_path.file_name() {
        return true;
    }
    target_is_symlink && path.parent() == Some(registration.parent_directory.as_path())
}
