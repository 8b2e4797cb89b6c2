use log::debug;
use parking_lot::RwLock;
use crate::config::structs::security_store_config::SecurityStoreConfig;
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::enums::store_material::StoreMaterial;
use crate::ssl::enums::store_role::StoreRole;
use crate::ssl::structs::key_material::KeyMaterial;
use crate::ssl::structs::security_store::SecurityStore;
use crate::ssl::structs::security_store_loader::SecurityStoreLoader;
use crate::ssl::structs::trust_material::TrustMaterial;

impl std::fmt::Debug for SecurityStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let config = self.config.read();
        f.debug_struct("SecurityStore")
            .field("role", &self.role)
            .field("path", &config.path)
            .field("store_type", &config.store_type)
            .field("fips", &self.fips)
            .finish()
    }
}

impl SecurityStore {
    pub fn new(role: StoreRole, config: SecurityStoreConfig, fips: bool) -> Result<SecurityStore, SslError> {
        SecurityStoreLoader::ensure_fips_compatible(&config, role, fips)?;
        Ok(SecurityStore {
            role,
            fips,
            config: RwLock::new(config),
        })
    }

    pub fn role(&self) -> StoreRole {
        self.role
    }

    pub fn config(&self) -> SecurityStoreConfig {
        self.config.read().clone()
    }

    pub fn path(&self) -> String {
        self.config.read().path.clone()
    }

    /// Replaces every setting, as done on the initial load.
    pub fn set_full(&self, config: SecurityStoreConfig) -> Result<(), SslError> {
        SecurityStoreLoader::ensure_fips_compatible(&config, self.role, self.fips)?;
        *self.config.write() = config;
        Ok(())
    }

    /// Points the store at another file, keeping type and passwords.
    pub fn set_path(&self, path: &str) {
        let mut config = self.config.write();
        debug!("[SSL] {} store path {} -> {}", self.role, config.path, path);
        *config = config.with_path(path);
    }

    pub fn load(&self) -> Result<StoreMaterial, SslError> {
        SecurityStoreLoader::load(&self.config(), self.role, self.fips)
    }

    pub fn load_key_material(&self) -> Result<KeyMaterial, SslError> {
        match self.load()? {
            StoreMaterial::Key(material) => Ok(material),
            StoreMaterial::Trust(_) => Err(SslError::InvalidConfig(format!("{} is not a key store", self.path()))),
        }
    }

    pub fn load_trust_material(&self) -> Result<TrustMaterial, SslError> {
        match self.load()? {
            StoreMaterial::Trust(material) => Ok(material),
            StoreMaterial::Key(_) => Err(SslError::InvalidConfig(format!("{} is not a trust store", self.path()))),
        }
    }
}
