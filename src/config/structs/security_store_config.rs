use serde::{Deserialize, Serialize};
use crate::config::enums::store_type::StoreType;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SecurityStoreConfig {
    pub path: String,
    #[serde(default)]
    pub store_type: StoreType,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub key_password: Option<String>,
    /// Separate private key file. Required for `der` key stores, optional for `pem`.
    #[serde(default)]
    pub key_path: Option<String>,
    /// Key manager or trust manager algorithm.
    #[serde(default)]
    pub algorithm: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
}
