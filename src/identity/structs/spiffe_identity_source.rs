use std::path::PathBuf;
use std::sync::Arc;
use arc_swap::ArcSwap;
use parking_lot::Mutex;
use rustls::crypto::CryptoProvider;
use crate::identity::structs::svid_material::SvidMaterial;
use crate::watcher::structs::file_watcher::FileWatcher;

pub struct SpiffeIdentitySource {
    pub(crate) svid_path: PathBuf,
    pub(crate) key_path: PathBuf,
    pub(crate) bundle_path: PathBuf,
    pub(crate) provider: Arc<CryptoProvider>,
    pub(crate) current: ArcSwap<SvidMaterial>,
    pub(crate) watchers: Mutex<Vec<FileWatcher>>,
    pub(crate) refresh_lock: Mutex<()>,
}
