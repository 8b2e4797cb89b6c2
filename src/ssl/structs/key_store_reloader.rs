use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use arc_swap::ArcSwap;
use parking_lot::Mutex;
use rustls::crypto::CryptoProvider;
use crate::ssl::structs::key_generation::KeyGeneration;
use crate::ssl::structs::load_failure_slot::LoadFailureSlot;
use crate::ssl::structs::security_store::SecurityStore;

pub struct KeyStoreReloader {
    pub(crate) store: Arc<SecurityStore>,
    /// Path as configured, possibly a symlink, resolved again on every reload.
    pub(crate) configured_path: PathBuf,
    pub(crate) provider: Arc<CryptoProvider>,
    pub(crate) generation: Arc<ArcSwap<KeyGeneration>>,
    pub(crate) last_failure: Arc<LoadFailureSlot>,
    pub(crate) next_id: AtomicU64,
    pub(crate) reload_lock: Mutex<()>,
}
