use std::path::Path;
use crate::watcher::enums::watch_error::WatchError;
use crate::watcher::structs::watch_registration::WatchRegistration;

impl WatchRegistration {
    pub fn new(path: &Path) -> Result<Self, WatchError> {
        let watched_path = std::path::absolute(path)
            .map_err(|e| WatchError::InvalidPath(path.display().to_string(), e.to_string()))?;
        let parent_directory = watched_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .ok_or_else(|| WatchError::NoParentDirectory(watched_path.display().to_string()))?;
        if !parent_directory.is_dir() {
            return Err(WatchError::ParentDirectoryNotFound(parent_directory.display().to_string()));
        }
        Ok(WatchRegistration { watched_path, parent_directory })
    }

    pub fn target_is_symlink(&self) -> bool {
        std::fs::symlink_metadata(&self.watched_path)
            .map(|metadata| metadata.file_type().is_symlink())
            .unwrap_or(false)
    }
}
