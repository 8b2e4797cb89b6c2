use serde::{Deserialize, Serialize};
use crate::config::enums::sni_mode::SniMode;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SniConfig {
    pub mode: SniMode,
    pub expected_headers: Vec<String>,
}
