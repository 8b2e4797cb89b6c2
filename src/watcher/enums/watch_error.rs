use thiserror::Error;

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("Invalid watch path {0}: {1}")]
    InvalidPath(String, String),

    #[error("Watched path has no parent directory: {0}")]
    NoParentDirectory(String),

    #[error("Parent directory not found: {0}")]
    ParentDirectoryNotFound(String),

    #[error("Watch backend error: {0}")]
    Backend(#[from] notify::Error),

    #[error("Failed to spawn watch thread: {0}")]
    Spawn(std::io::Error),
}
