use log::info;
use rcgen::{CertificateParams, KeyPair, SanType};
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::structs::generated_certificate::GeneratedCertificate;

/// Self-signed certificate valid for `names`, always including `localhost`.
pub fn generate_self_signed(names: &[String]) -> Result<GeneratedCertificate, SslError> {
    let mut subject_alt_names = vec![String::from("localhost")];
    subject_alt_names.extend(names.iter().filter(|name| name.as_str() != "localhost").cloned());
    let params = CertificateParams::new(subject_alt_names).map_err(|e| SslError::CertGen(e.to_string()))?;
    sign(params)
}

/// Self-signed SVID carrying `spiffe_id` as its only URI SAN, also valid for `localhost`.
pub fn generate_spiffe_svid(spiffe_id: &str) -> Result<GeneratedCertificate, SslError> {
    let mut params = CertificateParams::new(vec![String::from("localhost")]).map_err(|e| SslError::CertGen(e.to_string()))?;
    params
        .subject_alt_names
        .push(SanType::URI(spiffe_id.try_into().map_err(|e: rcgen::Error| SslError::CertGen(e.to_string()))?));
    sign(params)
}

fn sign(params: CertificateParams) -> Result<GeneratedCertificate, SslError> {
    let key_pair = KeyPair::generate().map_err(|e| SslError::CertGen(e.to_string()))?;
    let cert = params.self_signed(&key_pair).map_err(|e| SslError::CertGen(e.to_string()))?;
    info!("[CERTGEN] Generated a self-signed certificate");
    Ok(GeneratedCertificate {
        cert_pem: cert.pem(),
        key_pem: key_pair.serialize_pem(),
        cert_der: cert.der().clone(),
        key_der: key_pair.serialize_der(),
    })
}
