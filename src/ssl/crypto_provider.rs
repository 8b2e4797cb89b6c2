use std::collections::HashMap;
use std::sync::Arc;
use log::{debug, info};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use rustls::crypto::CryptoProvider;
use rustls::{CipherSuite, NamedGroup};
use crate::ssl::enums::ssl_error::SslError;

pub const DEFAULT_PROVIDER: &str = "ring";
pub const FIPS_PROVIDER: &str = "ring-fips";

const FIPS_CIPHER_SUITES: [CipherSuite; 6] = [
    CipherSuite::TLS13_AES_256_GCM_SHA384,
    CipherSuite::TLS13_AES_128_GCM_SHA256,
    CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384,
    CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
    CipherSuite::TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384,
    CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
];

type ProviderFactory = fn() -> CryptoProvider;

static REGISTRY: Lazy<Mutex<HashMap<String, Arc<CryptoProvider>>>> = Lazy::new(|| Mutex::new(HashMap::new()));

fn factory(name: &str) -> Option<ProviderFactory> {
    match name {
        DEFAULT_PROVIDER => Some(rustls::crypto::ring::default_provider),
        FIPS_PROVIDER => Some(ring_fips_provider),
        _ => None,
    }
}

/// ring limited to AES-GCM suites and NIST curves.
pub fn ring_fips_provider() -> CryptoProvider {
    let mut provider = rustls::crypto::ring::default_provider();
    provider.cipher_suites.retain(|suite| FIPS_CIPHER_SUITES.contains(&suite.suite()));
    provider
        .kx_groups
        .retain(|group| matches!(group.name(), NamedGroup::secp256r1 | NamedGroup::secp384r1));
    provider
}

/// Provider name to use once FIPS mode is taken into account.
pub fn effective_name(name: &str, fips: bool) -> &str {
    if fips && (name.is_empty() || name == DEFAULT_PROVIDER) {
        FIPS_PROVIDER
    } else if name.is_empty() {
        DEFAULT_PROVIDER
    } else {
        name
    }
}

/// Registers the named provider once and returns it. The first provider ever
/// installed also becomes the rustls process default.
pub fn install(name: &str) -> Result<Arc<CryptoProvider>, SslError> {
    let mut registry = REGISTRY.lock();
    if let Some(provider) = registry.get(name) {
        debug!("[SSL] Security provider {} already registered", name);
        return Ok(Arc::clone(provider));
    }
    let factory = factory(name).ok_or_else(|| SslError::UnknownProvider(name.to_string()))?;
    let provider = Arc::new(factory());
    if CryptoProvider::get_default().is_none() && CryptoProvider::install_default(provider.as_ref().clone()).is_ok() {
        info!("[SSL] Security provider {} installed as process default", name);
    }
    registry.insert(name.to_string(), Arc::clone(&provider));
    info!("[SSL] Registered security provider {}", name);
    Ok(provider)
}

pub fn installed_providers() -> Vec<String> {
    let mut names: Vec<String> = REGISTRY.lock().keys().cloned().collect();
    names.sort();
    names
}
