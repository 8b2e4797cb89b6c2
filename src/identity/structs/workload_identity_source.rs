use std::sync::Arc;
use arc_swap::ArcSwapOption;
use parking_lot::RwLock;
use rustls::crypto::CryptoProvider;
use crate::identity::structs::svid_material::SvidMaterial;

pub struct WorkloadIdentitySource {
    pub(crate) endpoint: String,
    pub(crate) provider: Arc<CryptoProvider>,
    /// `None` once shut down.
    pub(crate) source: RwLock<Option<spiffe::X509Source>>,
    /// Material built from the last SVID seen, rebuilt when the leaf changes.
    pub(crate) current: ArcSwapOption<SvidMaterial>,
}
