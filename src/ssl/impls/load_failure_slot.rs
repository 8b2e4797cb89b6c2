use std::sync::Arc;
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::structs::load_failure_slot::LoadFailureSlot;

impl LoadFailureSlot {
    pub fn new() -> LoadFailureSlot {
        LoadFailureSlot::default()
    }

    pub fn record(&self, error: SslError) -> Arc<SslError> {
        let error = Arc::new(error);
        self.slot.store(Some(Arc::clone(&error)));
        error
    }

    pub fn clear(&self) {
        self.slot.store(None);
    }

    pub fn get(&self) -> Option<Arc<SslError>> {
        self.slot.load_full()
    }

    pub fn is_set(&self) -> bool {
        self.slot.load().is_some()
    }
}
