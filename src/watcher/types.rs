pub type WatchCallbackError = Box<dyn std::error::Error + Send + Sync>;

pub type WatchCallback = Box<dyn FnMut() -> Result<(), WatchCallbackError> + Send>;
