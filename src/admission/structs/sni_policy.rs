use std::collections::HashSet;
use crate::config::enums::sni_mode::SniMode;

#[derive(Debug, Clone)]
pub struct SniPolicy {
    pub(crate) mode: SniMode,
    /// Lowercased, ports stripped.
    pub(crate) expected_headers: HashSet<String>,
}
