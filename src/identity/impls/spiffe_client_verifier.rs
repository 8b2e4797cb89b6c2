use std::sync::Arc;
use log::{debug, warn};
use rustls::client::danger::HandshakeSignatureValid;
use rustls::crypto::CryptoProvider;
use rustls::pki_types::{CertificateDer, UnixTime};
use rustls::server::WebPkiClientVerifier;
use rustls::server::danger::{ClientCertVerified, ClientCertVerifier};
use rustls::{CertificateError, DigitallySignedStruct, DistinguishedName, Error as TlsError, RootCertStore, SignatureScheme};
use spiffe_rustls::Authorizer;
use crate::identity::identity::spiffe_id_from_certificate;
use crate::identity::structs::spiffe_client_verifier::SpiffeClientVerifier;
use crate::identity::traits::identity_source::IdentitySource;

impl std::fmt::Debug for SpiffeClientVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpiffeClientVerifier")
            .field("local_id", &self.source.spiffe_id())
            .field("extra_roots", &self.extra_roots.as_ref().map(|roots| roots.len()))
            .field("mandatory", &self.mandatory)
            .finish()
    }
}

impl SpiffeClientVerifier {
    pub fn new(
        source: Arc<dyn IdentitySource>,
        extra_roots: Option<Arc<RootCertStore>>,
        authorizer: Arc<dyn Authorizer>,
        provider: Arc<CryptoProvider>,
        mandatory: bool,
    ) -> SpiffeClientVerifier {
        SpiffeClientVerifier { source, extra_roots, authorizer, provider, mandatory }
    }

    /// Current SPIFFE bundle plus the configured trust store, if any.
    pub fn roots(&self) -> Arc<RootCertStore> {
        let bundle = self.source.trust_bundle();
        match &self.extra_roots {
            None => bundle,
            Some(extra) => {
                let mut merged = (*bundle).clone();
                merged.roots.extend(extra.roots.iter().cloned());
                Arc::new(merged)
            }
        }
    }

    fn rejected() -> TlsError {
        TlsError::InvalidCertificate(CertificateError::ApplicationVerificationFailure)
    }
}

impl ClientCertVerifier for SpiffeClientVerifier {
    fn offer_client_auth(&self) -> bool {
        true
    }

    fn client_auth_mandatory(&self) -> bool {
        self.mandatory
    }

    fn root_hint_subjects(&self) -> &[DistinguishedName] {
        &[]
    }

    fn verify_client_cert(
        &self,
        end_entity: &CertificateDer<'_>,
        intermediates: &[CertificateDer<'_>],
        now: UnixTime,
    ) -> Result<ClientCertVerified, TlsError> {
        let chain_verifier = WebPkiClientVerifier::builder_with_provider(self.roots(), Arc::clone(&self.provider))
            .build()
            .map_err(|e| TlsError::General(format!("SPIFFE trust bundle unusable: {e}")))?;
        chain_verifier.verify_client_cert(end_entity, intermediates, now)?;

        let peer = spiffe_id_from_certificate(end_entity.as_ref()).map_err(|e| {
            warn!("[SPIFFE] Rejected client certificate: {}", e);
            Self::rejected()
        })?;
        if !self.authorizer.authorize(&peer) {
            warn!("[SPIFFE] Peer {} is not authorized", peer);
            return Err(Self::rejected());
        }
        debug!("[SPIFFE] Authorized peer {}", peer);
        Ok(ClientCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, TlsError> {
        rustls::crypto::verify_tls12_signature(message, cert, dss, &self.provider.signature_verification_algorithms)
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, TlsError> {
        rustls::crypto::verify_tls13_signature(message, cert, dss, &self.provider.signature_verification_algorithms)
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.provider.signature_verification_algorithms.supported_schemes()
    }
}
