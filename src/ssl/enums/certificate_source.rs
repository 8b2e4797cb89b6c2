use std::sync::Arc;
use arc_swap::ArcSwap;
use crate::identity::traits::identity_source::IdentitySource;
use crate::ssl::structs::key_generation::KeyGeneration;

#[derive(Clone)]
pub enum CertificateSource {
    /// Key store loaded from disk, swapped on rotation.
    KeyStore(Arc<ArcSwap<KeyGeneration>>),
    /// SVID handed out by a workload identity source.
    Identity(Arc<dyn IdentitySource>),
}
