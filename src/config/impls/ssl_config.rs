use std::path::PathBuf;
use std::time::Duration;
use crate::config::enums::client_auth::ClientAuth;
use crate::config::enums::store_type::StoreType;
use crate::config::structs::security_store_config::SecurityStoreConfig;
use crate::config::structs::spiffe_config::SpiffeConfig;
use crate::config::structs::ssl_config::SslConfig;

impl Default for SslConfig {
    fn default() -> Self {
        SslConfig {
            enabled: false,
            key_store: Some(SecurityStoreConfig::pem("cert.pem", Some("key.pem"))),
            trust_store: None,
            protocol: String::from("TLS"),
            enabled_protocols: vec![],
            cipher_suites: vec![],
            client_auth: ClientAuth::none,
            endpoint_identification_algorithm: String::from("HTTPS"),
            provider: String::from("ring"),
            fips_enabled: false,
            reload_on_change: true,
            watch_location: None,
            coalesce_window_ms: 250,
            spiffe: SpiffeConfig::default(),
        }
    }
}

impl SslConfig {
    pub fn coalesce_window(&self) -> Duration {
        Duration::from_millis(self.coalesce_window_ms)
    }

    /// Paths the key store watchers observe: `watch_location` alone, or the key
    /// store together with its separate key file.
    pub fn watched_key_store_paths(&self) -> Vec<PathBuf> {
        if let Some(location) = self.watch_location.as_ref().filter(|location| !location.is_empty()) {
            return vec![PathBuf::from(location)];
        }
        let Some(store) = &self.key_store else {
            return Vec::new();
        };
        let mut paths = vec![PathBuf::from(&store.path)];
        if let Some(key_path) = store.key_path.as_ref().filter(|key_path| !key_path.is_empty() && **key_path != store.path) {
            paths.push(PathBuf::from(key_path));
        }
        paths
    }
}

impl SecurityStoreConfig {
    pub fn pem(path: &str, key_path: Option<&str>) -> Self {
        SecurityStoreConfig {
            path: path.to_string(),
            store_type: StoreType::pem,
            password: None,
            key_password: None,
            key_path: key_path.map(str::to_string),
            algorithm: None,
            provider: None,
        }
    }

    pub fn der(path: &str, key_path: Option<&str>) -> Self {
        SecurityStoreConfig {
            store_type: StoreType::der,
            ..Self::pem(path, key_path)
        }
    }

    /// Same store settings pointing at another file, used on rotation.
    pub fn with_path(&self, path: &str) -> Self {
        SecurityStoreConfig {
            path: path.to_string(),
            ..self.clone()
        }
    }
}
