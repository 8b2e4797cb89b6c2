use std::fmt;
use crate::ssl::enums::store_role::StoreRole;

impl fmt::Display for StoreRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreRole::KeyStore => write!(f, "key"),
            StoreRole::TrustStore => write!(f, "trust"),
        }
    }
}
