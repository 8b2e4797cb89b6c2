use parking_lot::RwLock;
use crate::config::structs::security_store_config::SecurityStoreConfig;
use crate::ssl::enums::store_role::StoreRole;

pub struct SecurityStore {
    pub(crate) role: StoreRole,
    pub(crate) fips: bool,
    pub(crate) config: RwLock<SecurityStoreConfig>,
}
