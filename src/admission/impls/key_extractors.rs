use crate::admission::admission::{first_label, strip_port};
use crate::admission::structs::admission_request::AdmissionRequest;
use crate::admission::structs::key_extractors::{ConnectionKey, GlobalKey, RemoteIpKey, TenantFromHost, TenantFromPath};
use crate::admission::traits::key_extractor::KeyExtractor;

pub const GLOBAL_KEY: &str = "global";

impl KeyExtractor for GlobalKey {
    fn extract(&self, _request: &AdmissionRequest) -> Option<String> {
        Some(String::from(GLOBAL_KEY))
    }
}

impl KeyExtractor for RemoteIpKey {
    fn extract(&self, request: &AdmissionRequest) -> Option<String> {
        request.remote_addr.map(|addr| addr.ip().to_string())
    }
}

impl KeyExtractor for ConnectionKey {
    fn extract(&self, request: &AdmissionRequest) -> Option<String> {
        request.remote_addr.map(|addr| addr.to_string())
    }
}

impl KeyExtractor for TenantFromHost {
    fn extract(&self, request: &AdmissionRequest) -> Option<String> {
        let host = strip_port(request.host.as_deref()?.trim()).to_ascii_lowercase();
        first_label(&host).map(str::to_string)
    }
}

impl TenantFromPath {
    pub fn new(segment_after: Option<&str>) -> TenantFromPath {
        TenantFromPath {
            segment_after: segment_after.map(|segment| segment.trim_matches('/').to_string()).filter(|segment| !segment.is_empty()),
        }
    }
}

impl KeyExtractor for TenantFromPath {
    fn extract(&self, request: &AdmissionRequest) -> Option<String> {
        let mut segments = request.path.split('/').filter(|segment| !segment.is_empty());
        let tenant = match &self.segment_after {
            None => segments.next(),
            Some(marker) => segments.by_ref().find(|segment| *segment == marker.as_str()).and_then(|_| segments.next()),
        };
        tenant.map(str::to_string)
    }
}
