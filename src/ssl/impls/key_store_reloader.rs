use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use arc_swap::ArcSwap;
use log::{error, info};
use parking_lot::Mutex;
use rustls::crypto::CryptoProvider;
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::enums::store_role::StoreRole;
use crate::ssl::structs::key_generation::KeyGeneration;
use crate::ssl::structs::key_store_reloader::KeyStoreReloader;
use crate::ssl::structs::load_failure_slot::LoadFailureSlot;
use crate::ssl::structs::security_store::SecurityStore;
use crate::ssl::structs::security_store_loader::SecurityStoreLoader;

impl KeyStoreReloader {
    pub fn new(
        store: Arc<SecurityStore>,
        configured_path: PathBuf,
        provider: Arc<CryptoProvider>,
        generation: Arc<ArcSwap<KeyGeneration>>,
        last_failure: Arc<LoadFailureSlot>,
    ) -> KeyStoreReloader {
        let next_id = generation.load().id + 1;
        KeyStoreReloader {
            store,
            configured_path,
            provider,
            generation,
            last_failure,
            next_id: AtomicU64::new(next_id),
            reload_lock: Mutex::new(()),
        }
    }

    pub fn current(&self) -> Arc<KeyGeneration> {
        self.generation.load_full()
    }

    /// Loads the key store again and swaps in a new generation. On failure the
    /// active generation stays and the error is kept in the failure slot.
    pub fn reload(&self) -> Result<u64, Arc<SslError>> {
        let _serialized = self.reload_lock.lock();
        match self.try_reload() {
            Ok(generation) => {
                self.last_failure.clear();
                info!("[RELOAD] Key store {} reloaded, generation {} is active", self.configured_path.display(), generation.id);
                Ok(generation.id)
            }
            Err(e) => {
                error!(
                    "[RELOAD] Reloading key store {} failed, generation {} stays active: {}",
                    self.configured_path.display(),
                    self.generation.load().id,
                    e
                );
                Err(self.last_failure.record(e))
            }
        }
    }

    fn try_reload(&self) -> Result<Arc<KeyGeneration>, SslError> {
        let resolved = std::fs::canonicalize(&self.configured_path)
            .map_err(|e| SslError::StoreNotFound(StoreRole::KeyStore, format!("{}: {}", self.configured_path.display(), e)))?;
        let resolved_path = resolved.to_string_lossy().into_owned();

        let candidate = self.store.config().with_path(&resolved_path);
        let material = SecurityStoreLoader::load_key_store(&candidate)?;
        let certified_key = material.certified_key(&self.provider)?;
        self.store.set_path(&resolved_path);

        let generation = Arc::new(KeyGeneration {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            certified_key: Arc::new(certified_key),
            source_path: resolved,
            loaded_at: material.loaded_at,
        });
        self.generation.store(Arc::clone(&generation));
        Ok(generation)
    }
}
