use std::sync::Arc;
use parking_lot::Mutex;
use rustls::{RootCertStore, ServerConfig, SupportedProtocolVersion};
use rustls::crypto::CryptoProvider;
use crate::config::enums::client_auth::ClientAuth;
use crate::identity::traits::identity_source::IdentitySource;
use crate::ssl::enums::endpoint_identification::EndpointIdentification;
use crate::ssl::structs::context_cert_resolver::ContextCertResolver;
use crate::ssl::structs::key_store_reloader::KeyStoreReloader;
use crate::ssl::structs::load_failure_slot::LoadFailureSlot;
use crate::watcher::structs::file_watcher::FileWatcher;

pub struct TlsContext {
    pub(crate) server_config: Arc<ServerConfig>,
    pub(crate) provider: Arc<CryptoProvider>,
    pub(crate) resolver: Arc<ContextCertResolver>,
    pub(crate) reloader: Option<Arc<KeyStoreReloader>>,
    pub(crate) identity: Option<Arc<dyn IdentitySource>>,
    pub(crate) trust_roots: Option<Arc<RootCertStore>>,
    pub(crate) client_auth: ClientAuth,
    pub(crate) protocol_versions: Vec<&'static SupportedProtocolVersion>,
    pub(crate) endpoint_identification: EndpointIdentification,
    pub(crate) last_failure: Arc<LoadFailureSlot>,
    pub(crate) watchers: Mutex<Vec<FileWatcher>>,
}
