use serde::{Deserialize, Serialize};
use crate::config::structs::dos_config::DosConfig;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::sni_config::SniConfig;
use crate::config::structs::ssl_config::SslConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    #[serde(default)]
    pub server: HttpServerConfig,
    #[serde(default)]
    pub ssl: SslConfig,
    #[serde(default)]
    pub sni: SniConfig,
    #[serde(default)]
    pub dos: DosConfig,
}
