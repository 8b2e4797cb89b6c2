use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use arc_swap::ArcSwap;
use log::{debug, info};
use parking_lot::Mutex;
use rustls::{Error as TlsError, RootCertStore};
use rustls::crypto::CryptoProvider;
use rustls::sign::CertifiedKey;
use spiffe_rustls::SpiffeId;
use crate::config::structs::spiffe_config::SpiffeConfig;
use crate::identity::enums::identity_error::IdentityError;
use crate::identity::identity::spiffe_id_from_certificate;
use crate::identity::structs::spiffe_identity_source::SpiffeIdentitySource;
use crate::identity::structs::svid_material::SvidMaterial;
use crate::identity::traits::identity_source::IdentitySource;
use crate::ssl::structs::security_store_loader::SecurityStoreLoader;
use crate::watcher::structs::file_watcher::FileWatcher;
use crate::watcher::types::WatchCallbackError;

impl SpiffeIdentitySource {
    /// Loads the SVID files once and starts watching them. Any failure here is fatal.
    /// The Workload API socket in `config` is not consulted here.
    pub fn configure(
        config: &SpiffeConfig,
        provider: Arc<CryptoProvider>,
        coalesce_window: Duration,
    ) -> Result<Arc<SpiffeIdentitySource>, IdentityError> {
        if !Path::new(&config.svid_dir).is_dir() {
            return Err(IdentityError::DirectoryNotFound(config.svid_dir.clone()));
        }

        let svid_path = config.svid_path();
        let key_path = config.key_path();
        let bundle_path = config.bundle_path();
        let material = Self::load_material(&svid_path, &key_path, &bundle_path, &provider)?;
        info!("[SPIFFE] Loaded SVID {} from {}", material.spiffe_id, config.svid_dir);

        let source = Arc::new(SpiffeIdentitySource {
            svid_path,
            key_path,
            bundle_path,
            provider,
            current: ArcSwap::from_pointee(material),
            watchers: Mutex::new(Vec::new()),
            refresh_lock: Mutex::new(()),
        });

        let mut watchers = Vec::with_capacity(3);
        for path in [&source.svid_path, &source.key_path, &source.bundle_path] {
            let weak = Arc::downgrade(&source);
            let watcher = FileWatcher::watch_with_window(
                path,
                coalesce_window,
                Box::new(move || match weak.upgrade() {
                    Some(source) => source.refresh().map_err(|e| -> WatchCallbackError { Box::new(e) }),
                    None => Ok(()),
                }),
            )?;
            watchers.push(watcher);
        }
        *source.watchers.lock() = watchers;
        Ok(source)
    }

    /// Reads the SVID files again. The previous SVID stays active when they are unusable.
    pub fn refresh(&self) -> Result<(), IdentityError> {
        let _serialized = self.refresh_lock.lock();
        let material = Self::load_material(&self.svid_path, &self.key_path, &self.bundle_path, &self.provider)?;
        info!("[SPIFFE] Refreshed SVID {}", material.spiffe_id);
        self.current.store(Arc::new(material));
        Ok(())
    }

    pub fn loaded_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.current.load().loaded_at
    }

    fn load_material(
        svid_path: &Path,
        key_path: &Path,
        bundle_path: &Path,
        provider: &CryptoProvider,
    ) -> Result<SvidMaterial, IdentityError> {
        let (chain, _) = Self::read_pem(svid_path)?;
        let leaf = chain.first().ok_or_else(|| IdentityError::NoSvid(svid_path.display().to_string()))?;
        let spiffe_id = spiffe_id_from_certificate(leaf.as_ref())?;

        let (_, key) = Self::read_pem(key_path)?;
        let key = key.ok_or_else(|| IdentityError::NoKey(key_path.display().to_string()))?;
        let certified_key = CertifiedKey::from_der(chain, key, provider).map_err(|e| match e {
            TlsError::InconsistentKeys(_) => IdentityError::KeyMismatch(key_path.display().to_string()),
            e => IdentityError::SigningKey(e.to_string()),
        })?;

        let (anchors, _) = Self::read_pem(bundle_path)?;
        let mut bundle = RootCertStore::empty();
        for anchor in anchors {
            bundle.add(anchor).map_err(|e| IdentityError::Certificate(e.to_string()))?;
        }
        if bundle.is_empty() {
            return Err(IdentityError::EmptyBundle(bundle_path.display().to_string()));
        }
        debug!("[SPIFFE] {} has {} bundle anchors", spiffe_id, bundle.len());

        Ok(SvidMaterial {
            certified_key: Arc::new(certified_key),
            bundle: Arc::new(bundle),
            spiffe_id,
            loaded_at: chrono::Utc::now(),
        })
    }

    fn read_pem(
        path: &Path,
    ) -> Result<(Vec<rustls::pki_types::CertificateDer<'static>>, Option<rustls::pki_types::PrivateKeyDer<'static>>), IdentityError> {
        let display = path.display().to_string();
        let data = std::fs::read(path).map_err(|e| IdentityError::Read(display.clone(), e.to_string()))?;
        SecurityStoreLoader::parse_pem(&data, &display).map_err(|e| IdentityError::Read(display, e.to_string()))
    }

    pub fn paths(&self) -> [PathBuf; 3] {
        [self.svid_path.clone(), self.key_path.clone(), self.bundle_path.clone()]
    }
}

impl IdentitySource for SpiffeIdentitySource {
    fn certified_key(&self) -> Option<Arc<CertifiedKey>> {
        Some(Arc::clone(&self.current.load().certified_key))
    }

    fn trust_bundle(&self) -> Arc<RootCertStore> {
        Arc::clone(&self.current.load().bundle)
    }

    fn spiffe_id(&self) -> Option<SpiffeId> {
        Some(self.current.load().spiffe_id.clone())
    }

    fn shutdown(&self) {
        let watchers = std::mem::take(&mut *self.watchers.lock());
        for watcher in &watchers {
            watcher.shutdown();
        }
        if !watchers.is_empty() {
            info!("[SPIFFE] Stopped watching {}", self.svid_path.display());
        }
    }
}
