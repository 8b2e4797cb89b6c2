/// Running watch with its backend and thread.
pub mod file_watcher;

/// Watched path and the directory observed for it.
pub mod watch_registration;
