use std::time::Duration;
use crate::config::enums::tenant_source::TenantSource;
use crate::config::structs::dos_config::DosConfig;

impl Default for DosConfig {
    fn default() -> Self {
        DosConfig {
            enabled: false,
            global_max_requests_per_sec: 1000,
            per_connection_enabled: false,
            per_connection_max_requests_per_sec: 100,
            per_tenant_enabled: false,
            per_tenant_max_requests_per_sec: 100,
            tenant_source: TenantSource::host,
            tenant_path_segment: None,
            delay_ms: -1,
            throttled_requests: 5,
            max_wait_ms: 50,
            max_connection_duration_ms: 0,
            idle_eviction_secs: 300,
        }
    }
}

impl DosConfig {
    pub fn any_enabled(&self) -> bool {
        self.enabled || self.per_connection_enabled || self.per_tenant_enabled
    }

    pub fn max_wait(&self) -> Duration {
        Duration::from_millis(self.max_wait_ms)
    }

    pub fn max_connection_duration(&self) -> Option<Duration> {
        match self.max_connection_duration_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    pub fn idle_eviction(&self) -> Duration {
        Duration::from_secs(self.idle_eviction_secs)
    }
}
