use crate::config::enums::client_auth::ClientAuth;

impl ClientAuth {
    pub fn is_required(&self) -> bool {
        matches!(self, ClientAuth::need)
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, ClientAuth::none)
    }
}
