use std::sync::Arc;
use log::info;
use rustls::client::WebPkiServerVerifier;
use rustls::client::danger::ServerCertVerifier;
use rustls::crypto::CryptoProvider;
use rustls::sign::CertifiedKey;
use rustls::{ClientConfig, ServerConfig};
use crate::config::enums::client_auth::ClientAuth;
use crate::config::structs::ssl_config::SslConfig;
use crate::ssl::enums::build_state::BuildState;
use crate::ssl::enums::endpoint_identification::EndpointIdentification;
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::ssl::{cipher_suite_name, version_name};
use crate::ssl::structs::key_generation::KeyGeneration;
use crate::ssl::structs::relaxed_hostname_verifier::RelaxedHostnameVerifier;
use crate::ssl::structs::tls_context::TlsContext;
use crate::ssl::structs::tls_context_builder::TlsContextBuilder;
use crate::watcher::structs::file_watcher::FileWatcher;

impl std::fmt::Debug for TlsContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TlsContext")
            .field("client_auth", &self.client_auth)
            .field("protocols", &self.protocol_versions())
            .field("generation", &self.current_generation().map(|generation| generation.id))
            .field("identity", &self.identity.as_ref().and_then(|identity| identity.spiffe_id()))
            .field("watching", &self.is_watching())
            .finish()
    }
}

impl TlsContext {
    pub fn builder(config: SslConfig) -> TlsContextBuilder {
        TlsContextBuilder::new(config)
    }

    pub fn state(&self) -> BuildState {
        BuildState::Live
    }

    /// Server configuration for the listener. Rotations do not replace it, the
    /// certificate resolver inside always serves the active generation.
    pub fn server_config(&self) -> Arc<ServerConfig> {
        Arc::clone(&self.server_config)
    }

    pub fn provider(&self) -> Arc<CryptoProvider> {
        Arc::clone(&self.provider)
    }

    pub fn client_auth(&self) -> ClientAuth {
        self.client_auth
    }

    pub fn protocol_versions(&self) -> Vec<&'static str> {
        self.protocol_versions.iter().map(|version| version_name(version)).collect()
    }

    pub fn cipher_suites(&self) -> Vec<String> {
        self.provider.cipher_suites.iter().map(cipher_suite_name).collect()
    }

    pub fn endpoint_identification(&self) -> EndpointIdentification {
        self.endpoint_identification
    }

    /// rustls never renegotiates.
    pub fn renegotiation_allowed(&self) -> bool {
        false
    }

    /// Active key store generation, `None` when the certificate comes from a workload identity.
    pub fn current_generation(&self) -> Option<Arc<KeyGeneration>> {
        self.reloader.as_ref().map(|reloader| reloader.current())
    }

    pub fn current_certified_key(&self) -> Option<Arc<CertifiedKey>> {
        self.resolver.current()
    }

    pub fn last_load_failure(&self) -> Option<Arc<SslError>> {
        self.last_failure.get()
    }

    /// Reloads the key store now, exactly as a detected file change would.
    pub fn reload(&self) -> Result<u64, Arc<SslError>> {
        match &self.reloader {
            Some(reloader) => reloader.reload(),
            None => Err(Arc::new(SslError::InvalidConfig(String::from("this context has no key store to reload")))),
        }
    }

    pub fn is_watching(&self) -> bool {
        self.watchers.lock().iter().any(FileWatcher::is_running)
    }

    /// Client configuration for outbound connections presenting the same
    /// credentials and trusting the configured anchors.
    pub fn client_config(&self) -> Result<Arc<ClientConfig>, SslError> {
        let roots = match (&self.trust_roots, &self.identity) {
            (Some(roots), _) => Arc::clone(roots),
            (None, Some(identity)) => identity.trust_bundle(),
            (None, None) => return Err(SslError::MissingTrustAnchors(String::from("outbound connections need a trust store"))),
        };
        let webpki = WebPkiServerVerifier::builder_with_provider(roots, Arc::clone(&self.provider))
            .build()
            .map_err(|e| SslError::Verifier(e.to_string()))?;
        let verifier: Arc<dyn ServerCertVerifier> = match self.endpoint_identification {
            EndpointIdentification::Https => webpki,
            EndpointIdentification::Disabled => Arc::new(RelaxedHostnameVerifier::new(webpki)),
        };

        let config = ClientConfig::builder_with_provider(Arc::clone(&self.provider))
            .with_protocol_versions(&self.protocol_versions)?
            .dangerous()
            .with_custom_certificate_verifier(verifier)
            .with_client_cert_resolver(self.resolver.clone());
        Ok(Arc::new(config))
    }

    /// Stops every watcher owned by the context. Idempotent.
    pub fn shutdown(&self) {
        let watchers = std::mem::take(&mut *self.watchers.lock());
        for watcher in &watchers {
            watcher.shutdown();
        }
        if let Some(identity) = &self.identity {
            identity.shutdown();
        }
        if !watchers.is_empty() {
            info!("[SSL] TLS context shut down, {} watchers stopped", watchers.len());
        }
    }
}
