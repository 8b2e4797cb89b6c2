use std::path::PathBuf;
use std::sync::Arc;
use arc_swap::ArcSwap;
use log::{debug, info, warn};
use parking_lot::Mutex;
use rustls::ServerConfig;
use rustls::crypto::CryptoProvider;
use rustls::server::WebPkiClientVerifier;
use rustls::server::danger::ClientCertVerifier;
use spiffe_rustls::Authorizer;
use crate::config::structs::ssl_config::SslConfig;
use crate::identity::authorizer;
use crate::identity::structs::spiffe_client_verifier::SpiffeClientVerifier;
use crate::identity::structs::spiffe_identity_source::SpiffeIdentitySource;
use crate::identity::structs::workload_identity_source::WorkloadIdentitySource;
use crate::identity::traits::identity_source::IdentitySource;
use crate::ssl::crypto_provider;
use crate::ssl::enums::build_state::BuildState;
use crate::ssl::enums::certificate_source::CertificateSource;
use crate::ssl::enums::endpoint_identification::EndpointIdentification;
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::enums::store_role::StoreRole;
use crate::ssl::ssl::{cipher_suite_name, protocol_versions, restrict_cipher_suites, version_name};
use crate::ssl::structs::context_cert_resolver::ContextCertResolver;
use crate::ssl::structs::key_generation::KeyGeneration;
use crate::ssl::structs::key_store_reloader::KeyStoreReloader;
use crate::ssl::structs::load_failure_slot::LoadFailureSlot;
use crate::ssl::structs::security_store::SecurityStore;
use crate::ssl::structs::security_store_loader::SecurityStoreLoader;
use crate::ssl::structs::tls_context::TlsContext;
use crate::ssl::structs::tls_context_builder::TlsContextBuilder;
use crate::ssl::structs::tls_policy::TlsPolicy;
use crate::watcher::structs::file_watcher::FileWatcher;
use crate::watcher::types::WatchCallbackError;

impl TlsContextBuilder {
    pub fn new(config: SslConfig) -> TlsContextBuilder {
        TlsContextBuilder {
            config,
            state: BuildState::Unconfigured,
            authorizer: None,
            identity: None,
            provider: None,
            key_store: None,
            key_material: None,
            trust: None,
            policy: None,
        }
    }

    /// Peer authorization for SPIFFE client certificates, replacing the configured one.
    #[must_use]
    pub fn with_authorizer(mut self, authorizer: Arc<dyn Authorizer>) -> Self {
        self.authorizer = Some(authorizer);
        self
    }

    /// Identity source to use instead of the SVID files named in `ssl.spiffe`.
    #[must_use]
    pub fn with_identity_source(mut self, source: Arc<dyn IdentitySource>) -> Self {
        self.identity = Some(source);
        self
    }

    /// Connects to the SPIFFE Workload API named by `ssl.spiffe.socket_path` and
    /// uses it as the identity source. Does nothing when SPIFFE is disabled, no
    /// socket is configured or an identity source was already set.
    pub async fn connect_workload_api(mut self) -> Result<Self, SslError> {
        if self.identity.is_some() || !self.config.spiffe.enabled {
            return Ok(self);
        }
        let Some(socket) = self.config.spiffe.workload_socket().map(str::to_string) else {
            return Ok(self);
        };
        let fips = self.config.fips_enabled;
        let provider = crypto_provider::install(crypto_provider::effective_name(&self.config.provider, fips))?;
        let source: Arc<dyn IdentitySource> = WorkloadIdentitySource::connect(&socket, provider).await?;
        self.identity = Some(source);
        Ok(self)
    }

    pub fn state(&self) -> BuildState {
        self.state
    }

    pub fn build(mut self) -> Result<TlsContext, SslError> {
        self.load_stores()?;
        self.apply_policy()?;
        self.finish()
    }

    /// `Unconfigured -> StoresLoaded`: provider, identity source, key store and trust store.
    pub fn load_stores(&mut self) -> Result<(), SslError> {
        self.expect_state(BuildState::Unconfigured)?;
        let fips = self.config.fips_enabled;
        let provider = crypto_provider::install(crypto_provider::effective_name(&self.config.provider, fips))?;

        if let Some(key_store) = &self.config.key_store {
            SecurityStoreLoader::ensure_fips_compatible(key_store, StoreRole::KeyStore, fips)?;
        }
        if let Some(trust_store) = &self.config.trust_store {
            SecurityStoreLoader::ensure_fips_compatible(trust_store, StoreRole::TrustStore, fips)?;
        }

        if self.identity.is_none() && self.config.spiffe.enabled {
            if let Some(socket) = self.config.spiffe.workload_socket() {
                return Err(SslError::InvalidConfig(format!(
                    "Workload API socket {} needs connect_workload_api before the stores are loaded",
                    socket
                )));
            }
            let source: Arc<dyn IdentitySource> =
                SpiffeIdentitySource::configure(&self.config.spiffe, Arc::clone(&provider), self.config.coalesce_window())?;
            self.identity = Some(source);
        }

        match (&self.config.key_store, &self.identity) {
            (Some(key_store), Some(_)) => {
                warn!("[SSL] Workload identity is enabled, key store {} is not used for the server certificate", key_store.path);
            }
            (Some(key_store), None) => {
                let store = Arc::new(SecurityStore::new(StoreRole::KeyStore, key_store.clone(), fips)?);
                let material = store.load_key_material()?;
                info!("[SSL] Loaded key store {} ({} certificates)", key_store.path, material.chain.len());
                self.key_store = Some(store);
                self.key_material = Some(material);
            }
            (None, Some(_)) => {}
            (None, None) => {
                return Err(SslError::InvalidConfig(String::from("neither a key store nor a workload identity is configured")));
            }
        }

        if let Some(trust_store) = &self.config.trust_store {
            let store = SecurityStore::new(StoreRole::TrustStore, trust_store.clone(), fips)?;
            let material = store.load_trust_material()?;
            info!("[SSL] Loaded trust store {} ({} anchors)", trust_store.path, material.roots.len());
            self.trust = Some(material);
        }

        self.provider = Some(provider);
        self.transition(BuildState::StoresLoaded);
        Ok(())
    }

    /// `StoresLoaded -> PolicyApplied`: protocol versions, cipher suites, client authentication.
    pub fn apply_policy(&mut self) -> Result<(), SslError> {
        self.expect_state(BuildState::StoresLoaded)?;
        let base = self.provider.as_ref().ok_or_else(|| self.state_error(BuildState::StoresLoaded))?;

        let versions = protocol_versions(&self.config.protocol, &self.config.enabled_protocols)?;
        let provider = Arc::new(restrict_cipher_suites(base, &self.config.cipher_suites)?);
        let endpoint_identification = EndpointIdentification::from_name(&self.config.endpoint_identification_algorithm)?;
        let client_verifier = self.client_verifier(&provider)?;

        self.policy = Some(TlsPolicy {
            versions,
            provider,
            client_verifier,
            endpoint_identification,
        });
        self.transition(BuildState::PolicyApplied);
        Ok(())
    }

    /// `PolicyApplied -> Live`: assembles the server configuration and starts watching the key store.
    pub fn finish(mut self) -> Result<TlsContext, SslError> {
        self.expect_state(BuildState::PolicyApplied)?;
        let policy = self.policy.take().ok_or_else(|| self.state_error(BuildState::PolicyApplied))?;
        let last_failure = Arc::new(LoadFailureSlot::new());

        let (source, reloader) = match (&self.identity, self.key_material.take(), &self.key_store) {
            (Some(identity), _, _) => (CertificateSource::Identity(Arc::clone(identity)), None),
            (None, Some(material), Some(store)) => {
                let certified_key = material.certified_key(&policy.provider)?;
                let generation = Arc::new(ArcSwap::from_pointee(KeyGeneration {
                    id: 1,
                    certified_key: Arc::new(certified_key),
                    source_path: material.source_path.clone(),
                    loaded_at: material.loaded_at,
                }));
                let reloader = Arc::new(KeyStoreReloader::new(
                    Arc::clone(store),
                    PathBuf::from(store.path()),
                    Arc::clone(&policy.provider),
                    Arc::clone(&generation),
                    Arc::clone(&last_failure),
                ));
                (CertificateSource::KeyStore(generation), Some(reloader))
            }
            _ => return Err(SslError::InvalidConfig(String::from("no certificate source was loaded"))),
        };
        let resolver = Arc::new(ContextCertResolver::new(source));

        let builder = ServerConfig::builder_with_provider(Arc::clone(&policy.provider)).with_protocol_versions(&policy.versions)?;
        let builder = match &policy.client_verifier {
            Some(verifier) => builder.with_client_cert_verifier(Arc::clone(verifier)),
            None => builder.with_no_client_auth(),
        };
        let server_config = builder.with_cert_resolver(resolver.clone());

        let mut watchers = Vec::new();
        if let Some(reloader) = reloader.as_ref().filter(|_| self.config.reload_on_change) {
            let watch_paths = self.config.watched_key_store_paths();
            if watch_paths.is_empty() {
                return Err(SslError::InvalidConfig(String::from("hot reload needs a key store path or watch_location")));
            }
            for watch_path in watch_paths {
                let callback_reloader = Arc::clone(reloader);
                let watcher = FileWatcher::watch_with_window(
                    &watch_path,
                    self.config.coalesce_window(),
                    Box::new(move || {
                        callback_reloader
                            .reload()
                            .map(|_| ())
                            .map_err(|e| -> WatchCallbackError { Box::new(e) })
                    }),
                )?;
                watchers.push(watcher);
            }
        }

        self.transition(BuildState::Live);
        info!(
            "[SSL] TLS context live: client auth {:?}, protocols {:?}, {} cipher suites, hot reload {}",
            self.config.client_auth,
            policy.versions.iter().map(|version| version_name(version)).collect::<Vec<_>>(),
            policy.provider.cipher_suites.len(),
            if watchers.is_empty() { "off" } else { "on" }
        );
        debug!(
            "[SSL] Cipher suites: {:?}",
            policy.provider.cipher_suites.iter().map(cipher_suite_name).collect::<Vec<_>>()
        );

        Ok(TlsContext {
            server_config: Arc::new(server_config),
            provider: policy.provider,
            resolver,
            reloader,
            identity: self.identity.take(),
            trust_roots: self.trust.take().map(|trust| trust.roots),
            client_auth: self.config.client_auth,
            protocol_versions: policy.versions,
            endpoint_identification: policy.endpoint_identification,
            last_failure,
            watchers: Mutex::new(watchers),
        })
    }

    fn client_verifier(&self, provider: &Arc<CryptoProvider>) -> Result<Option<Arc<dyn ClientCertVerifier>>, SslError> {
        let client_auth = self.config.client_auth;
        if !client_auth.is_enabled() {
            return Ok(None);
        }
        let extra_roots = self.trust.as_ref().map(|trust| Arc::clone(&trust.roots));

        if let Some(identity) = &self.identity {
            let authorizer = match &self.authorizer {
                Some(authorizer) => Arc::clone(authorizer),
                None => authorizer::from_config(&self.config.spiffe)?,
            };
            return Ok(Some(Arc::new(SpiffeClientVerifier::new(
                Arc::clone(identity),
                extra_roots,
                authorizer,
                Arc::clone(provider),
                client_auth.is_required(),
            ))));
        }

        let roots = extra_roots
            .ok_or_else(|| SslError::MissingTrustAnchors(format!("client_auth = {:?} without a trust store", client_auth)))?;
        let builder = WebPkiClientVerifier::builder_with_provider(roots, Arc::clone(provider));
        let builder = if client_auth.is_required() {
            builder
        } else {
            builder.allow_unauthenticated()
        };
        builder.build().map(Some).map_err(|e| SslError::Verifier(e.to_string()))
    }

    fn expect_state(&self, expected: BuildState) -> Result<(), SslError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(self.state_error(expected))
        }
    }

    fn state_error(&self, expected: BuildState) -> SslError {
        SslError::InvalidState { expected, actual: self.state }
    }

    fn transition(&mut self, next: BuildState) {
        debug!("[SSL] Context builder {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
