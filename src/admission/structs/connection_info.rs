use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionInfo {
    /// Server name requested by the client, `None` without TLS or SNI.
    pub sni: Option<String>,
    pub accepted_at: Instant,
}
