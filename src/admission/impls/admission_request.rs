use std::net::SocketAddr;
use actix_web::dev::ServiceRequest;
use actix_web::http::header;
use crate::admission::structs::admission_request::AdmissionRequest;
use crate::admission::structs::connection_info::ConnectionInfo;

impl AdmissionRequest {
    pub fn new(path: &str) -> AdmissionRequest {
        AdmissionRequest {
            path: path.to_string(),
            ..AdmissionRequest::default()
        }
    }

    #[must_use]
    pub fn with_remote_addr(mut self, remote_addr: SocketAddr) -> Self {
        self.remote_addr = Some(remote_addr);
        self
    }

    #[must_use]
    pub fn with_host(mut self, host: &str) -> Self {
        self.host = Some(host.to_string());
        self
    }

    #[must_use]
    pub fn with_sni(mut self, sni: &str) -> Self {
        self.sni = Some(sni.to_string());
        self
    }

    /// Host comes from the Host header, or the URI authority on HTTP/2. SNI
    /// comes from the connection data recorded at accept time.
    pub fn from_service_request(request: &ServiceRequest) -> AdmissionRequest {
        let host = request
            .headers()
            .get(header::HOST)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .or_else(|| request.uri().authority().map(|authority| authority.as_str().to_string()));
        AdmissionRequest {
            remote_addr: request.peer_addr(),
            host,
            path: request.path().to_string(),
            sni: request.conn_data::<ConnectionInfo>().and_then(|info| info.sni.clone()),
        }
    }
}
