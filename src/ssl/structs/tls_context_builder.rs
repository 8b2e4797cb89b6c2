use std::sync::Arc;
use rustls::crypto::CryptoProvider;
use spiffe_rustls::Authorizer;
use crate::config::structs::ssl_config::SslConfig;
use crate::identity::traits::identity_source::IdentitySource;
use crate::ssl::enums::build_state::BuildState;
use crate::ssl::structs::key_material::KeyMaterial;
use crate::ssl::structs::security_store::SecurityStore;
use crate::ssl::structs::tls_policy::TlsPolicy;
use crate::ssl::structs::trust_material::TrustMaterial;

pub struct TlsContextBuilder {
    pub(crate) config: SslConfig,
    pub(crate) state: BuildState,
    pub(crate) authorizer: Option<Arc<dyn Authorizer>>,
    pub(crate) identity: Option<Arc<dyn IdentitySource>>,
    pub(crate) provider: Option<Arc<CryptoProvider>>,
    pub(crate) key_store: Option<Arc<SecurityStore>>,
    pub(crate) key_material: Option<KeyMaterial>,
    pub(crate) trust: Option<TrustMaterial>,
    pub(crate) policy: Option<TlsPolicy>,
}
