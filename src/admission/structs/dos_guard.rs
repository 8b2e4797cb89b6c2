use std::rc::Rc;
use std::sync::Arc;
use crate::admission::structs::dos_filter_chain::DosFilterChain;

#[derive(Clone)]
pub struct DosGuard {
    pub(crate) chain: Arc<DosFilterChain>,
}

pub struct DosGuardMiddleware<S> {
    pub(crate) service: Rc<S>,
    pub(crate) chain: Arc<DosFilterChain>,
}
