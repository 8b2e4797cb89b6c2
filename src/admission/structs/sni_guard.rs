use std::rc::Rc;
use std::sync::Arc;
use crate::admission::structs::sni_policy::SniPolicy;

#[derive(Debug, Clone)]
pub struct SniGuard {
    pub(crate) policy: Arc<SniPolicy>,
}

pub struct SniGuardMiddleware<S> {
    pub(crate) service: Rc<S>,
    pub(crate) policy: Arc<SniPolicy>,
}
