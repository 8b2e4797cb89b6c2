use crate::ssl::structs::key_material::KeyMaterial;
use crate::ssl::structs::trust_material::TrustMaterial;

#[derive(Debug)]
pub enum StoreMaterial {
    Key(KeyMaterial),
    Trust(TrustMaterial),
}
