use rustls::pki_types::CertificateDer;

pub struct GeneratedCertificate {
    pub cert_pem: String,
    pub key_pem: String,
    pub cert_der: CertificateDer<'static>,
    /// PKCS#8 encoded private key.
    pub key_der: Vec<u8>,
}
