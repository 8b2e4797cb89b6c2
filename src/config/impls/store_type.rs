use std::fmt;
use crate::config::enums::store_type::StoreType;

impl StoreType {
    pub fn is_pem(&self) -> bool {
        matches!(self, StoreType::pem)
    }
}

impl fmt::Display for StoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreType::pem => write!(f, "PEM"),
            StoreType::der => write!(f, "DER"),
        }
    }
}
