use serde::{Deserialize, Serialize};
use crate::config::enums::tenant_source::TenantSource;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DosConfig {
    pub enabled: bool,
    pub global_max_requests_per_sec: u32,
    pub per_connection_enabled: bool,
    pub per_connection_max_requests_per_sec: u32,
    pub per_tenant_enabled: bool,
    pub per_tenant_max_requests_per_sec: u32,
    pub tenant_source: TenantSource,
    /// With `tenant_source = "path"`, the tenant is the segment following this one.
    pub tenant_path_segment: Option<String>,
    /// Negative rejects, zero throttles, positive delays by that many milliseconds.
    pub delay_ms: i64,
    pub throttled_requests: usize,
    pub max_wait_ms: u64,
    /// Zero disables the limit.
    pub max_connection_duration_ms: u64,
    pub idle_eviction_secs: u64,
}
