use rustls::crypto::CryptoProvider;
use rustls::sign::CertifiedKey;
use rustls::Error as TlsError;
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::structs::key_material::KeyMaterial;

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("certs_count", &self.chain.len())
            .field("source_path", &self.source_path)
            .field("key_path", &self.key_path)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

impl KeyMaterial {
    /// Pairs the chain with the private key. Fails when the key does not match
    /// the leaf certificate.
    pub fn certified_key(&self, provider: &CryptoProvider) -> Result<CertifiedKey, SslError> {
        CertifiedKey::from_der(self.chain.clone(), self.key.clone_key(), provider).map_err(|e| match e {
            TlsError::InconsistentKeys(_) => SslError::KeyMismatch(format!(
                "{} and {}",
                self.source_path.display(),
                self.key_path.display()
            )),
            e => SslError::CertifiedKeyError(format!("{}: {}", self.key_path.display(), e)),
        })
    }
}
