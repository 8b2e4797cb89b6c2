use crate::admission::structs::admission_request::AdmissionRequest;

/// Returns the admission key of a request, or `None` when the filter does not
/// apply to it.
pub trait KeyExtractor: Send + Sync {
    fn extract(&self, request: &AdmissionRequest) -> Option<String>;
}

impl<F> KeyExtractor for F
where
    F: Fn(&AdmissionRequest) -> Option<String> + Send + Sync,
{
    fn extract(&self, request: &AdmissionRequest) -> Option<String> {
        self(request)
    }
}
