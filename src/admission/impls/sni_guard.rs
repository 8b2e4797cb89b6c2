use std::rc::Rc;
use std::sync::Arc;
use actix_web::Error;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use crate::admission::structs::admission_request::AdmissionRequest;
use crate::admission::structs::sni_guard::{SniGuard, SniGuardMiddleware};
use crate::admission::structs::sni_policy::SniPolicy;

impl SniGuard {
    pub fn new(policy: Arc<SniPolicy>) -> SniGuard {
        SniGuard { policy }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SniGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = SniGuardMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SniGuardMiddleware {
            service: Rc::new(service),
            policy: Arc::clone(&self.policy),
        }))
    }
}

impl<S, B> Service<ServiceRequest> for SniGuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let request = AdmissionRequest::from_service_request(&req);
        if let Err(error) = self.policy.check(request.sni.as_deref(), request.host.as_deref()) {
            return Box::pin(async move { Ok(req.error_response(error).map_into_right_body()) });
        }
        let service = Rc::clone(&self.service);
        Box::pin(async move { service.call(req).await.map(ServiceResponse::map_into_left_body) })
    }
}
