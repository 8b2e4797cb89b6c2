use std::path::Path;
use std::sync::Arc;
use arc_swap::ArcSwapOption;
use log::{debug, info, warn};
use parking_lot::RwLock;
use rustls::{Error as TlsError, RootCertStore};
use rustls::crypto::CryptoProvider;
use rustls::pki_types::{CertificateDer, PrivateKeyDer, PrivatePkcs8KeyDer};
use rustls::sign::CertifiedKey;
use spiffe::X509SourceBuilder;
use spiffe::bundle::BundleSource;
use spiffe_rustls::SpiffeId;
use crate::identity::enums::identity_error::IdentityError;
use crate::identity::identity::parse_spiffe_id;
use crate::identity::structs::svid_material::SvidMaterial;
use crate::identity::structs::workload_identity_source::WorkloadIdentitySource;
use crate::identity::traits::identity_source::IdentitySource;

impl WorkloadIdentitySource {
    /// Connects to the Workload API and waits for the first SVID. `socket` is a
    /// filesystem path, which must exist, or an endpoint URI such as `unix:///run/spire/agent.sock`.
    pub async fn connect(socket: &str, provider: Arc<CryptoProvider>) -> Result<Arc<WorkloadIdentitySource>, IdentityError> {
        let endpoint = Self::endpoint(socket)?;
        let source = X509SourceBuilder::new()
            .endpoint(endpoint.clone())
            .build()
            .await
            .map_err(|e| IdentityError::WorkloadApi(format!("{}: {}", endpoint, e)))?;

        let workload = Arc::new(WorkloadIdentitySource {
            endpoint,
            provider,
            source: RwLock::new(Some(source)),
            current: ArcSwapOption::empty(),
        });
        let material = workload.refresh()?;
        info!("[SPIFFE] Received SVID {} from {}", material.spiffe_id, workload.endpoint);
        Ok(workload)
    }

    fn endpoint(socket: &str) -> Result<String, IdentityError> {
        if socket.contains("://") {
            return Ok(socket.to_string());
        }
        let path = Path::new(socket);
        if !path.exists() {
            return Err(IdentityError::SocketNotFound(socket.to_string()));
        }
        let resolved = std::fs::canonicalize(path).map_err(|e| IdentityError::Read(socket.to_string(), e.to_string()))?;
        Ok(format!("unix://{}", resolved.display()))
    }

    /// Builds material from the SVID the source holds now, reusing the cached one
    /// while the leaf certificate is unchanged.
    pub fn refresh(&self) -> Result<Arc<SvidMaterial>, IdentityError> {
        let guard = self.source.read();
        let source = guard
            .as_ref()
            .ok_or_else(|| IdentityError::WorkloadApi(format!("{} is shut down", self.endpoint)))?;
        let svid = source.svid().map_err(|e| IdentityError::WorkloadApi(e.to_string()))?;

        let leaf: &[u8] = svid.leaf().as_ref();
        if let Some(current) = self.current.load_full() {
            if current.certified_key.cert.first().is_some_and(|cert| cert.as_ref() == leaf) {
                return Ok(current);
            }
        }

        let spiffe_id: SpiffeId = parse_spiffe_id(&svid.spiffe_id().to_string())?;
        let chain: Vec<CertificateDer<'static>> = svid
            .cert_chain()
            .iter()
            .map(|cert| CertificateDer::from(cert.as_ref().to_vec()))
            .collect();
        let key = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(svid.private_key().as_ref().to_vec()));
        let certified_key = CertifiedKey::from_der(chain, key, &self.provider).map_err(|e| match e {
            TlsError::InconsistentKeys(_) => IdentityError::KeyMismatch(spiffe_id.to_string()),
            e => IdentityError::SigningKey(e.to_string()),
        })?;

        let trust_domain = svid.spiffe_id().trust_domain();
        let bundle = source
            .bundle_for_trust_domain(trust_domain)
            .map_err(|e| IdentityError::WorkloadApi(e.to_string()))?
            .ok_or_else(|| IdentityError::EmptyBundle(trust_domain.to_string()))?;
        let mut roots = RootCertStore::empty();
        for authority in bundle.authorities() {
            roots
                .add(CertificateDer::from(authority.as_ref().to_vec()))
                .map_err(|e| IdentityError::Certificate(e.to_string()))?;
        }
        if roots.is_empty() {
            return Err(IdentityError::EmptyBundle(trust_domain.to_string()));
        }
        debug!("[SPIFFE] {} has {} bundle anchors", spiffe_id, roots.len());

        let material = Arc::new(SvidMaterial {
            certified_key: Arc::new(certified_key),
            bundle: Arc::new(roots),
            spiffe_id,
            loaded_at: chrono::Utc::now(),
        });
        self.current.store(Some(Arc::clone(&material)));
        Ok(material)
    }

    pub fn endpoint_uri(&self) -> &str {
        &self.endpoint
    }

    /// Current material, falling back to the last good one when the source fails
    /// or was shut down.
    fn material(&self) -> Option<Arc<SvidMaterial>> {
        if self.source.read().is_none() {
            return self.current.load_full();
        }
        match self.refresh() {
            Ok(material) => Some(material),
            Err(error) => {
                warn!("[SPIFFE] Keeping the previous SVID: {}", error);
                self.current.load_full()
            }
        }
    }
}

impl IdentitySource for WorkloadIdentitySource {
    fn certified_key(&self) -> Option<Arc<CertifiedKey>> {
        self.material().map(|material| Arc::clone(&material.certified_key))
    }

    fn trust_bundle(&self) -> Arc<RootCertStore> {
        self.material()
            .map(|material| Arc::clone(&material.bundle))
            .unwrap_or_else(|| Arc::new(RootCertStore::empty()))
    }

    fn spiffe_id(&self) -> Option<SpiffeId> {
        self.material().map(|material| material.spiffe_id.clone())
    }

    fn shutdown(&self) {
        if self.source.write().take().is_some() {
            info!("[SPIFFE] Disconnected from {}", self.endpoint);
        }
    }
}
