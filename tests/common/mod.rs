#![allow(dead_code)]
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use rest_utils::config::structs::security_store_config::SecurityStoreConfig;
use rest_utils::config::structs::ssl_config::SslConfig;
use rest_utils::ssl::cert_gen::{generate_self_signed, generate_spiffe_svid};
use rest_utils::ssl::structs::generated_certificate::GeneratedCertificate;
use rustls::pki_types::{CertificateDer, PrivateKeyDer, PrivatePkcs8KeyDer, ServerName};
use rustls::{ClientConfig, ClientConnection, Connection, RootCertStore, ServerConfig, ServerConnection};

pub const WAIT_TIMEOUT: Duration = Duration::from_secs(10);

pub fn self_signed() -> GeneratedCertificate {
    generate_self_signed(&[String::from("localhost")]).unwrap()
}

/// Writes certificate and key into one PEM file. Goes through a rename so a
/// watcher sees a single complete replacement.
pub fn write_combined(path: &Path, generated: &GeneratedCertificate) {
    atomic_write(path, format!("{}{}", generated.cert_pem, generated.key_pem).as_bytes());
}

pub fn atomic_write(path: &Path, contents: &[u8]) {
    let staging = path.with_extension("staging");
    fs::write(&staging, contents).unwrap();
    fs::rename(&staging, path).unwrap();
}

pub fn write_trust(path: &Path, certificates: &[&GeneratedCertificate]) {
    let pem: String = certificates.iter().map(|generated| generated.cert_pem.as_str()).collect();
    fs::write(path, pem).unwrap();
}

/// SSL configuration serving `key_store`, with hot reload and a short coalescing window.
pub fn ssl_config(key_store: &Path) -> SslConfig {
    SslConfig {
        enabled: true,
        key_store: Some(SecurityStoreConfig::pem(&key_store.display().to_string(), None)),
        reload_on_change: true,
        coalesce_window_ms: 50,
        ..SslConfig::default()
    }
}

pub fn provider() -> Arc<rustls::crypto::CryptoProvider> {
    Arc::new(rustls::crypto::ring::default_provider())
}

pub fn client_config(trusted: &[&GeneratedCertificate], identity: Option<&GeneratedCertificate>) -> Arc<ClientConfig> {
    let mut roots = RootCertStore::empty();
    for generated in trusted {
        roots.add(generated.cert_der.clone()).unwrap();
    }
    let builder = ClientConfig::builder_with_provider(provider())
        .with_safe_default_protocol_versions()
        .unwrap()
        .with_root_certificates(roots);
    let config = match identity {
        Some(generated) => builder
            .with_client_auth_cert(vec![generated.cert_der.clone()], private_key(generated))
            .unwrap(),
        None => builder.with_no_client_auth(),
    };
    Arc::new(config)
}

pub fn private_key(generated: &GeneratedCertificate) -> PrivateKeyDer<'static> {
    PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(generated.key_der.clone()))
}

/// Runs a complete handshake in memory and returns the certificate chain the
/// client received.
pub fn handshake(
    server: Arc<ServerConfig>,
    client: Arc<ClientConfig>,
    server_name: &str,
) -> Result<Vec<CertificateDer<'static>>, rustls::Error> {
    let name = ServerName::try_from(server_name.to_string()).map_err(|e| rustls::Error::General(e.to_string()))?;
    let mut client = Connection::from(ClientConnection::new(client, name)?);
    let mut server = Connection::from(ServerConnection::new(server)?);
    for _ in 0..16 {
        transfer(&mut client, &mut server)?;
        transfer(&mut server, &mut client)?;
        if !client.is_handshaking() && !server.is_handshaking() {
            return Ok(client.peer_certificates().map(<[CertificateDer<'static>]>::to_vec).unwrap_or_default());
        }
    }
    Err(rustls::Error::General(String::from("handshake did not complete")))
}

fn transfer(from: &mut Connection, to: &mut Connection) -> Result<(), rustls::Error> {
    let mut buffer = Vec::new();
    while from.wants_write() {
        from.write_tls(&mut buffer).map_err(|e| rustls::Error::General(e.to_string()))?;
    }
    let mut pending = buffer.as_slice();
    while !pending.is_empty() {
        to.read_tls(&mut pending).map_err(|e| rustls::Error::General(e.to_string()))?;
        to.process_new_packets()?;
    }
    Ok(())
}

pub fn wait_until<F: FnMut() -> bool>(timeout: Duration, mut condition: F) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    condition()
}

/// Writes svid.pem, svid_key.pem and svid_bundle.pem for `spiffe_id`, the SVID
/// being its own bundle anchor.
pub fn write_svid(dir: &Path, spiffe_id: &str) -> GeneratedCertificate {
    let svid = generate_spiffe_svid(spiffe_id).unwrap();
    fs::write(dir.join("svid.pem"), &svid.cert_pem).unwrap();
    fs::write(dir.join("svid_key.pem"), &svid.key_pem).unwrap();
    fs::write(dir.join("svid_bundle.pem"), &svid.cert_pem).unwrap();
    svid
}

pub fn path_string<P: AsRef<Path>>(path: P) -> String {
    path.as_ref().display().to_string()
}
