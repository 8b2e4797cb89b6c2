use crate::ssl::enums::certificate_source::CertificateSource;

pub struct ContextCertResolver {
    pub(crate) source: CertificateSource,
}
