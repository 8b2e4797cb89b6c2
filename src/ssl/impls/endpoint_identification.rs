use crate::ssl::enums::endpoint_identification::EndpointIdentification;
use crate::ssl::enums::ssl_error::SslError;

impl EndpointIdentification {
    pub fn from_name(name: &str) -> Result<EndpointIdentification, SslError> {
        match name.trim() {
            "" => Ok(EndpointIdentification::Disabled),
            algorithm if algorithm.eq_ignore_ascii_case("https") => Ok(EndpointIdentification::Https),
            algorithm => Err(SslError::InvalidConfig(format!("unsupported endpoint identification algorithm '{}'", algorithm))),
        }
    }
}
