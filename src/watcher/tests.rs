#[cfg(test)]
mod watcher_tests {
    use std::path::PathBuf;
    use notify::event::{AccessKind, AccessMode, CreateKind, DataChange, Flag, ModifyKind, RemoveKind};
    use notify::{Event, EventKind};
    use crate::watcher::structs::watch_registration::WatchRegistration;
    use crate::watcher::watcher::{batch_is_relevant, event_is_relevant};

    fn registration() -> WatchRegistration {
        WatchRegistration {
            watched_path: PathBuf::from("/etc/certs/keystore.pem"),
            parent_directory: PathBuf::from("/etc/certs"),
        }
    }

    #[test]
    fn test_exact_path_is_relevant() {
        let event = Event::new(EventKind::Modify(ModifyKind::Data(DataChange::Content))).add_path(PathBuf::from("/etc/certs/keystore.pem"));
        assert!(event_is_relevant(&registration(), &event, false));
    }

    #[test]
    fn test_same_file_name_is_relevant() {
        let event = Event::new(EventKind::Create(CreateKind::File)).add_path(PathBuf::from("/private/etc/certs/keystore.pem"));
        assert!(event_is_relevant(&registration(), &event, false));
    }

    #[test]
    fn test_sibling_file_is_ignored() {
        let event = Event::new(EventKind::Create(CreateKind::File)).add_path(PathBuf::from("/etc/certs/truststore.pem"));
        assert!(!event_is_relevant(&registration(), &event, false));
    }

    #[test]
    fn test_sibling_entry_is_relevant_for_symlink_target() {
        let event = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(PathBuf::from("/etc/certs/..data"));
        assert!(event_is_relevant(&registration(), &event, true));
    }

    #[test]
    fn test_access_and_remove_are_ignored() {
        let access = Event::new(EventKind::Access(AccessKind::Close(AccessMode::Read))).add_path(PathBuf::from("/etc/certs/keystore.pem"));
        let remove = Event::new(EventKind::Remove(RemoveKind::File)).add_path(PathBuf::from("/etc/certs/keystore.pem"));
        assert!(!event_is_relevant(&registration(), &access, false));
        assert!(!event_is_relevant(&registration(), &remove, false));
    }

    #[test]
    fn test_rescan_is_relevant() {
        let event = Event::new(EventKind::Other).set_flag(Flag::Rescan);
        assert!(event_is_relevant(&registration(), &event, false));
    }

    #[test]
    fn test_batch_with_error_only_is_ignored() {
        let batch = vec![Err(notify::Error::generic("queue overflow"))];
        assert!(!batch_is_relevant(&registration(), &batch));
    }

    #[test]
    fn test_registration_requires_existing_parent() {
        let result = WatchRegistration::new(std::path::Path::new("/definitely/not/here/keystore.pem"));
        assert!(result.is_err());
    }

    #[test]
    fn test_registration_in_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        let registration = WatchRegistration::new(&dir.path().join("keystore.pem")).unwrap();
        assert!(registration.watched_path.is_absolute());
        assert_eq!(registration.parent_directory, dir.path());
    }
}
