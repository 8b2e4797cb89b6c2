/// Errors raised while registering a watch.
pub mod watch_error;
