use serde::{Deserialize, Serialize};
use crate::config::enums::client_auth::ClientAuth;
use crate::config::structs::security_store_config::SecurityStoreConfig;
use crate::config::structs::spiffe_config::SpiffeConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SslConfig {
    pub enabled: bool,
    pub key_store: Option<SecurityStoreConfig>,
    pub trust_store: Option<SecurityStoreConfig>,
    /// `TLS`, `TLSv1.2` or `TLSv1.3`.
    pub protocol: String,
    /// Allow-list of protocol versions, empty means every version `protocol` allows.
    pub enabled_protocols: Vec<String>,
    /// Allow-list of IANA cipher suite names, empty means the provider default.
    pub cipher_suites: Vec<String>,
    pub client_auth: ClientAuth,
    /// `HTTPS` enables host name verification for outbound connections, empty disables it.
    pub endpoint_identification_algorithm: String,
    pub provider: String,
    pub fips_enabled: bool,
    pub reload_on_change: bool,
    /// Path to watch instead of the key store path.
    pub watch_location: Option<String>,
    pub coalesce_window_ms: u64,
    pub spiffe: SpiffeConfig,
}
