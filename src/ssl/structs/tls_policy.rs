use std::sync::Arc;
use rustls::SupportedProtocolVersion;
use rustls::crypto::CryptoProvider;
use rustls::server::danger::ClientCertVerifier;
use crate::ssl::enums::endpoint_identification::EndpointIdentification;

pub struct TlsPolicy {
    pub versions: Vec<&'static SupportedProtocolVersion>,
    /// Provider restricted to the allowed cipher suites.
    pub provider: Arc<CryptoProvider>,
    pub client_verifier: Option<Arc<dyn ClientCertVerifier>>,
    pub endpoint_identification: EndpointIdentification,
}
