use std::sync::Arc;
use rustls::SignatureScheme;
use rustls::client::ResolvesClientCert;
use rustls::server::{ClientHello, ResolvesServerCert};
use rustls::sign::CertifiedKey;
use crate::ssl::enums::certificate_source::CertificateSource;
use crate::ssl::structs::context_cert_resolver::ContextCertResolver;

impl std::fmt::Debug for ContextCertResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source = match &self.source {
            CertificateSource::KeyStore(generation) => format!("key store generation {}", generation.load().id),
            CertificateSource::Identity(_) => String::from("workload identity"),
        };
        f.debug_struct("ContextCertResolver")
            .field("source", &source)
            .finish()
    }
}

impl ContextCertResolver {
    pub fn new(source: CertificateSource) -> ContextCertResolver {
        ContextCertResolver { source }
    }

    pub fn current(&self) -> Option<Arc<CertifiedKey>> {
        match &self.source {
            CertificateSource::KeyStore(generation) => Some(Arc::clone(&generation.load().certified_key)),
            CertificateSource::Identity(identity) => identity.certified_key(),
        }
    }
}

impl ResolvesServerCert for ContextCertResolver {
    fn resolve(&self, _client_hello: ClientHello<'_>) -> Option<Arc<CertifiedKey>> {
        self.current()
    }
}

impl ResolvesClientCert for ContextCertResolver {
    fn resolve(&self, _root_hint_subjects: &[&[u8]], _sigschemes: &[SignatureScheme]) -> Option<Arc<CertifiedKey>> {
        self.current()
    }

    fn has_certs(&self) -> bool {
        true
    }
}
