use std::net::SocketAddr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdmissionRequest {
    pub remote_addr: Option<SocketAddr>,
    /// Host header as sent, port included.
    pub host: Option<String>,
    pub path: String,
    pub sni: Option<String>,
}
