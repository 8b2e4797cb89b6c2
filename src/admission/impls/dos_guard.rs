use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;
use actix_web::Error;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::ConnectionType;
use futures_util::future::{LocalBoxFuture, Ready, ready};
use crate::admission::enums::dos_decision::DosDecision;
use crate::admission::structs::admission_request::AdmissionRequest;
use crate::admission::structs::connection_info::ConnectionInfo;
use crate::admission::structs::dos_filter_chain::DosFilterChain;
use crate::admission::structs::dos_guard::{DosGuard, DosGuardMiddleware};

impl DosGuard {
    pub fn new(chain: Arc<DosFilterChain>) -> DosGuard {
        DosGuard { chain }
    }
}

impl<S, B> Transform<S, ServiceRequest> for DosGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = DosGuardMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(DosGuardMiddleware {
            service: Rc::new(service),
            chain: Arc::clone(&self.chain),
        }))
    }
}

impl<S, B> Service<ServiceRequest> for DosGuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let chain = Arc::clone(&self.chain);
        Box::pin(async move {
            let expired = req
                .conn_data::<ConnectionInfo>()
                .is_some_and(|info| chain.connection_expired(info.accepted_at, Instant::now()));

            let decision = if chain.is_empty() {
                DosDecision::Admit
            } else {
                match chain.check(&AdmissionRequest::from_service_request(&req)) {
                    Ok(decision) => decision,
                    Err(error) => return Ok(req.error_response(error).map_into_right_body()),
                }
            };

            let _permit = match decision {
                DosDecision::Throttle => chain.acquire_throttle().await,
                DosDecision::Delay(delay) => {
                    tokio::time::sleep(delay).await;
                    None
                }
                DosDecision::Admit | DosDecision::Reject => None,
            };

            let mut response = service.call(req).await?.map_into_left_body();
            if expired {
                response.response_mut().head_mut().set_connection_type(ConnectionType::Close);
            }
            Ok(response)
        })
    }
}
