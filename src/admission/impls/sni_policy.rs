use log::{debug, warn};
use crate::admission::admission::{first_label, strip_port};
use crate::admission::enums::admission_error::AdmissionError;
use crate::admission::structs::sni_policy::SniPolicy;
use crate::config::enums::sni_mode::SniMode;
use crate::config::structs::sni_config::SniConfig;

impl SniPolicy {
    pub fn new<I, S>(mode: SniMode, expected_headers: I) -> SniPolicy
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        SniPolicy {
            mode,
            expected_headers: expected_headers
                .into_iter()
                .map(|host| strip_port(host.as_ref().trim()).to_ascii_lowercase())
                .filter(|host| !host.is_empty())
                .collect(),
        }
    }

    pub fn from_config(config: &SniConfig) -> SniPolicy {
        Self::new(config.mode, &config.expected_headers)
    }

    pub fn disabled() -> SniPolicy {
        Self::new(SniMode::disabled, Vec::<String>::new())
    }

    pub fn mode(&self) -> SniMode {
        self.mode
    }

    /// A missing SNI is accepted in every mode.
    pub fn check(&self, sni: Option<&str>, host: Option<&str>) -> Result<(), AdmissionError> {
        if self.mode == SniMode::disabled {
            return Ok(());
        }
        let host = host.map(|host| strip_port(host.trim()).to_ascii_lowercase()).unwrap_or_default();
        let sni = match sni.map(str::trim).filter(|sni| !sni.is_empty()) {
            Some(sni) => sni.to_ascii_lowercase(),
            None => {
                if !self.expected_headers.is_empty() && !self.expected_headers.contains(&host) {
                    warn!("[SNI] Request without SNI for unexpected host '{}'", host);
                }
                return Ok(());
            }
        };

        let accepted = match self.mode {
            SniMode::disabled => true,
            SniMode::strict => sni == host,
            SniMode::tenant_prefix => {
                let tenant = first_label(&sni).ok_or_else(|| AdmissionError::SniWithoutPrefix { sni: sni.clone() })?;
                host.strip_prefix(tenant)
                    .is_some_and(|rest| rest.starts_with('.') || rest.starts_with('-'))
            }
        };
        if accepted {
            return Ok(());
        }
        debug!("[SNI] Rejected request for host '{}' on connection with SNI '{}'", host, sni);
        Err(AdmissionError::SniMismatch { sni, host })
    }
}
