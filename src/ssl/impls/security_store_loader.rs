use std::path::{Path, PathBuf};
use std::sync::Arc;
use log::{debug, warn};
use rustls::RootCertStore;
use rustls::pki_types::{CertificateDer, PrivateKeyDer, PrivatePkcs8KeyDer};
use rustls_pemfile::Item;
use crate::config::enums::store_type::StoreType;
use crate::config::structs::security_store_config::SecurityStoreConfig;
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::enums::store_material::StoreMaterial;
use crate::ssl::enums::store_role::StoreRole;
use crate::ssl::structs::key_material::KeyMaterial;
use crate::ssl::structs::security_store_loader::SecurityStoreLoader;
use crate::ssl::structs::trust_material::TrustMaterial;

/// Key manager and trust manager algorithm names accepted for compatibility.
/// Verification always runs through webpki.
const KNOWN_ALGORITHMS: [&str; 4] = ["PKIX", "SUNX509", "NEWSUNX509", "X509"];

impl SecurityStoreLoader {
    pub fn load(config: &SecurityStoreConfig, role: StoreRole, fips: bool) -> Result<StoreMaterial, SslError> {
        Self::ensure_fips_compatible(config, role, fips)?;
        Self::check_algorithm(config, role)?;
        match role {
            StoreRole::KeyStore => Self::load_key_store(config).map(StoreMaterial::Key),
            StoreRole::TrustStore => Self::load_trust_store(config).map(StoreMaterial::Trust),
        }
    }

    pub fn ensure_fips_compatible(config: &SecurityStoreConfig, role: StoreRole, fips: bool) -> Result<(), SslError> {
        if fips && config.store_type != StoreType::pem {
            return Err(SslError::FipsStoreType(role, config.store_type));
        }
        Ok(())
    }

    pub fn check_algorithm(config: &SecurityStoreConfig, role: StoreRole) -> Result<(), SslError> {
        match config.algorithm.as_deref().map(str::trim) {
            None | Some("") => Ok(()),
            Some(algorithm) if KNOWN_ALGORITHMS.contains(&algorithm.to_ascii_uppercase().as_str()) => Ok(()),
            Some(algorithm) => Err(SslError::UnsupportedAlgorithm(role, algorithm.to_string())),
        }
    }

    pub fn load_key_store(config: &SecurityStoreConfig) -> Result<KeyMaterial, SslError> {
        if config.key_password.as_deref().is_some_and(|password| !password.is_empty()) {
            warn!("[SSL] Encrypted private keys are not supported, key_password for {} is ignored", config.path);
        }
        let separate_key = config.key_path.as_deref().filter(|path| !path.is_empty());
        let data = Self::read(&config.path, StoreRole::KeyStore)?;

        let (chain, key, key_path) = match config.store_type {
            StoreType::pem => {
                let (chain, key_in_store) = Self::parse_pem(&data, &config.path)?;
                let (key, key_path) = match separate_key {
                    Some(key_path) => {
                        let key_data = Self::read(key_path, StoreRole::KeyStore)?;
                        let (_, key) = Self::parse_pem(&key_data, key_path)?;
                        (key.ok_or_else(|| SslError::NoKeyFound(key_path.to_string()))?, key_path)
                    }
                    None => (key_in_store.ok_or_else(|| SslError::NoKeyFound(config.path.clone()))?, config.path.as_str()),
                };
                (chain, key, key_path)
            }
            StoreType::der => {
                let key_path = separate_key
                    .ok_or_else(|| SslError::InvalidConfig(format!("DER key store {} needs a key_path", config.path)))?;
                let key_data = Self::read(key_path, StoreRole::KeyStore)?;
                let key = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(key_data));
                (vec![CertificateDer::from(data)], key, key_path)
            }
        };
        if chain.is_empty() {
            return Err(SslError::NoCertificatesFound(config.path.clone()));
        }

        debug!("[SSL] Read key store {} ({} certificates, key from {})", config.path, chain.len(), key_path);
        Ok(KeyMaterial {
            chain,
            key,
            source_path: PathBuf::from(&config.path),
            key_path: PathBuf::from(key_path),
            loaded_at: chrono::Utc::now(),
        })
    }

    pub fn load_trust_store(config: &SecurityStoreConfig) -> Result<TrustMaterial, SslError> {
        let data = Self::read(&config.path, StoreRole::TrustStore)?;
        let certificates = match config.store_type {
            StoreType::pem => Self::parse_pem(&data, &config.path)?.0,
            StoreType::der => vec![CertificateDer::from(data)],
        };
        if certificates.is_empty() {
            return Err(SslError::NoCertificatesFound(config.path.clone()));
        }

        let mut roots = RootCertStore::empty();
        for certificate in &certificates {
            roots
                .add(certificate.clone())
                .map_err(|e| SslError::CertParseError(format!("{}: {}", config.path, e)))?;
        }
        debug!("[SSL] Read trust store {} ({} anchors)", config.path, roots.len());
        Ok(TrustMaterial {
            roots: Arc::new(roots),
            certificates,
            source_path: PathBuf::from(&config.path),
            loaded_at: chrono::Utc::now(),
        })
    }

    /// Certificates in file order and the single private key of a PEM document.
    pub fn parse_pem(
        data: &[u8],
        path: &str,
    ) -> Result<(Vec<CertificateDer<'static>>, Option<PrivateKeyDer<'static>>), SslError> {
        let mut reader = data;
        let mut certificates = Vec::new();
        let mut keys: Vec<PrivateKeyDer<'static>> = Vec::new();
        for item in rustls_pemfile::read_all(&mut reader) {
            match item.map_err(|e| SslError::CertParseError(format!("{}: {}", path, e)))? {
                Item::X509Certificate(certificate) => certificates.push(certificate),
                Item::Pkcs8Key(key) => keys.push(PrivateKeyDer::Pkcs8(key)),
                Item::Pkcs1Key(key) => keys.push(PrivateKeyDer::Pkcs1(key)),
                Item::Sec1Key(key) => keys.push(PrivateKeyDer::Sec1(key)),
                _ => {}
            }
        }
        if keys.len() > 1 {
            return Err(SslError::KeyParseError(format!("{} contains {} private keys, expected one", path, keys.len())));
        }
        Ok((certificates, keys.pop()))
    }

    fn read(path: &str, role: StoreRole) -> Result<Vec<u8>, SslError> {
        std::fs::read(Path::new(path)).map_err(|e| SslError::StoreNotFound(role, format!("{}: {}", path, e)))
    }
}
