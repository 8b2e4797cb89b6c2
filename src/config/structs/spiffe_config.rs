use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SpiffeConfig {
    pub enabled: bool,
    /// Directory the SPIFFE helper writes the SVID files into. Used when no
    /// Workload API socket is configured.
    pub svid_dir: String,
    pub svid_file: String,
    pub key_file: String,
    pub bundle_file: String,
    /// Workload API socket (`/run/spire/agent.sock` or `unix:///...`). When set the
    /// SVID comes from the Workload API instead of `svid_dir`.
    pub socket_path: Option<String>,
    pub authorized_ids: Vec<String>,
    pub authorized_trust_domains: Vec<String>,
}
