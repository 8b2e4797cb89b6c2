use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchRegistration {
    pub watched_path: PathBuf,
    pub parent_directory: PathBuf,
}
