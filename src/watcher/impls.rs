/// Registration, shutdown and drop for `FileWatcher`.
pub mod file_watcher;

pub mod watch_registration;
