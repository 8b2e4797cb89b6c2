use spiffe_rustls::SpiffeId;
use x509_parser::prelude::{FromDer, GeneralName, X509Certificate};
use crate::identity::enums::identity_error::IdentityError;

const SCHEME: &str = "spiffe://";

/// Reads the single `spiffe://` URI SAN of a DER certificate.
pub fn spiffe_id_from_certificate(der: &[u8]) -> Result<SpiffeId, IdentityError> {
    let (_, certificate) = X509Certificate::from_der(der).map_err(|e| IdentityError::Certificate(e.to_string()))?;
    let san = certificate
        .subject_alternative_name()
        .map_err(|e| IdentityError::Certificate(e.to_string()))?
        .ok_or(IdentityError::MissingSpiffeId)?;

    let mut uris = san.value.general_names.iter().filter_map(|name| match name {
        GeneralName::URI(uri) if uri.starts_with(SCHEME) => Some(*uri),
        _ => None,
    });
    let uri = uris.next().ok_or(IdentityError::MissingSpiffeId)?;
    if uris.next().is_some() {
        return Err(IdentityError::InvalidSpiffeId(uri.to_string(), String::from("certificate carries more than one SPIFFE ID")));
    }
    parse_spiffe_id(uri)
}

pub fn parse_spiffe_id(id: &str) -> Result<SpiffeId, IdentityError> {
    SpiffeId::new(id).map_err(|e| IdentityError::InvalidSpiffeId(id.to_string(), e.to_string()))
}
