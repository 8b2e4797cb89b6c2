use crate::ssl::structs::key_generation::KeyGeneration;

impl std::fmt::Debug for KeyGeneration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyGeneration")
            .field("id", &self.id)
            .field("certs_count", &self.certified_key.cert.len())
            .field("source_path", &self.source_path)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}
