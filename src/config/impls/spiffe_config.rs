use std::path::PathBuf;
use crate::config::structs::spiffe_config::SpiffeConfig;

impl Default for SpiffeConfig {
    fn default() -> Self {
        SpiffeConfig {
            enabled: false,
            svid_dir: String::from("/run/spiffe/certs"),
            svid_file: String::from("svid.pem"),
            key_file: String::from("svid_key.pem"),
            bundle_file: String::from("svid_bundle.pem"),
            socket_path: None,
            authorized_ids: vec![],
            authorized_trust_domains: vec![],
        }
    }
}

impl SpiffeConfig {
    pub fn svid_path(&self) -> PathBuf {
        PathBuf::from(&self.svid_dir).join(&self.svid_file)
    }

    pub fn key_path(&self) -> PathBuf {
        PathBuf::from(&self.svid_dir).join(&self.key_file)
    }

    pub fn bundle_path(&self) -> PathBuf {
        PathBuf::from(&self.svid_dir).join(&self.bundle_file)
    }

    /// Workload API socket, `None` when unset or empty.
    pub fn workload_socket(&self) -> Option<&str> {
        self.socket_path.as_deref().filter(|socket| !socket.is_empty())
    }
}
