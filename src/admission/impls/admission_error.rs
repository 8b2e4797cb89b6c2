use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use crate::admission::enums::admission_error::AdmissionError;

impl AdmissionError {
    pub fn status(&self) -> StatusCode {
        match self {
            AdmissionError::SniMismatch { .. } | AdmissionError::SniWithoutPrefix { .. } => StatusCode::MISDIRECTED_REQUEST,
            AdmissionError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        }
    }

    /// Body sent to the client, free of request details.
    pub fn public_message(&self) -> &'static str {
        match self {
            AdmissionError::SniMismatch { .. } | AdmissionError::SniWithoutPrefix { .. } => "Misdirected Request",
            AdmissionError::RateLimited { .. } => "Too Many Requests",
        }
    }
}

impl ResponseError for AdmissionError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status())
            .content_type(ContentType::plaintext())
            .body(self.public_message())
    }
}
