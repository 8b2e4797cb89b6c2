mod common;

use std::fs;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use common::*;
use rest_utils::config::enums::client_auth::ClientAuth;
use rest_utils::config::structs::security_store_config::SecurityStoreConfig;
use rest_utils::config::structs::spiffe_config::SpiffeConfig;
use rest_utils::identity::enums::identity_error::IdentityError;
use rest_utils::identity::identity::spiffe_id_from_certificate;
use rest_utils::ssl::enums::build_state::BuildState;
use rest_utils::ssl::enums::endpoint_identification::EndpointIdentification;
use rest_utils::ssl::enums::ssl_error::SslError;
use rest_utils::ssl::structs::tls_context::TlsContext;
use rest_utils::ssl::structs::tls_context_builder::TlsContextBuilder;
use spiffe_rustls::SpiffeId;
use tempfile::TempDir;

#[test]
fn test_build_serves_key_store() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("server.pem");
    let first = self_signed();
    write_combined(&store, &first);

    let context = TlsContext::builder(ssl_config(&store)).build().unwrap();
    assert_eq!(context.state(), BuildState::Live);
    assert_eq!(context.current_generation().unwrap().id, 1);
    assert!(context.is_watching());
    assert!(!context.renegotiation_allowed());
    assert_eq!(context.protocol_versions(), vec!["TLSv1.3", "TLSv1.2"]);

    let chain = handshake(context.server_config(), client_config(&[&first], None), "localhost").unwrap();
    assert_eq!(chain[0], first.cert_der);
    context.shutdown();
    assert!(!context.is_watching());
}

#[test]
fn test_separate_key_file_and_disabled_reload() {
    let dir = TempDir::new().unwrap();
    let generated = self_signed();
    fs::write(dir.path().join("cert.pem"), &generated.cert_pem).unwrap();
    fs::write(dir.path().join("key.pem"), &generated.key_pem).unwrap();

    let mut config = ssl_config(&dir.path().join("cert.pem"));
    config.key_store = Some(SecurityStoreConfig::pem(
        &path_string(dir.path().join("cert.pem")),
        Some(&path_string(dir.path().join("key.pem"))),
    ));
    config.reload_on_change = false;

    let context = TlsContext::builder(config).build().unwrap();
    assert!(!context.is_watching());
    assert!(handshake(context.server_config(), client_config(&[&generated], None), "localhost").is_ok());
}

#[test]
fn test_fips_rejects_der_key_store() {
    let mut config = ssl_config(std::path::Path::new("/nonexistent/cert.der"));
    config.fips_enabled = true;
    config.key_store = Some(SecurityStoreConfig::der("/nonexistent/cert.der", Some("/nonexistent/key.der")));
    assert!(matches!(TlsContext::builder(config).build(), Err(SslError::FipsStoreType(_, _))));
}

#[test]
fn test_fips_checks_key_store_when_spiffe_serves() {
    let dir = TempDir::new().unwrap();
    write_svid(dir.path(), "spiffe://example.org/api");
    let mut config = ssl_config(std::path::Path::new("/nonexistent/cert.der"));
    config.fips_enabled = true;
    config.key_store = Some(SecurityStoreConfig::der("/nonexistent/cert.der", Some("/nonexistent/key.der")));
    config.spiffe.enabled = true;
    config.spiffe.svid_dir = path_string(dir.path());
    assert!(matches!(TlsContext::builder(config.clone()).build(), Err(SslError::FipsStoreType(_, _))));

    config.key_store = None;
    config.trust_store = Some(SecurityStoreConfig::der("/nonexistent/ca.der", None));
    assert!(matches!(TlsContext::builder(config).build(), Err(SslError::FipsStoreType(_, _))));
}

#[test]
fn test_fips_limits_cipher_suites() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("server.pem");
    write_combined(&store, &self_signed());
    let mut config = ssl_config(&store);
    config.fips_enabled = true;
    config.reload_on_change = false;

    let context = TlsContext::builder(config).build().unwrap();
    assert!(context.cipher_suites().iter().all(|suite| suite.contains("GCM")));
}

#[test]
fn test_missing_key_store_is_fatal() {
    let config = ssl_config(std::path::Path::new("/nonexistent/server.pem"));
    assert!(matches!(TlsContext::builder(config).build(), Err(SslError::StoreNotFound(_, _))));
}

#[test]
fn test_stages_out_of_order() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("server.pem");
    write_combined(&store, &self_signed());

    let mut builder = TlsContextBuilder::new(ssl_config(&store));
    assert!(matches!(
        builder.apply_policy(),
        Err(SslError::InvalidState { expected: BuildState::StoresLoaded, actual: BuildState::Unconfigured })
    ));
    builder.load_stores().unwrap();
    assert_eq!(builder.state(), BuildState::StoresLoaded);
    assert!(builder.load_stores().is_err());
    builder.apply_policy().unwrap();
    assert_eq!(builder.state(), BuildState::PolicyApplied);
    let context = builder.finish().unwrap();
    context.shutdown();
}

#[test]
fn test_protocol_and_cipher_policy() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("server.pem");
    write_combined(&store, &self_signed());
    let mut config = ssl_config(&store);
    config.enabled_protocols = vec![String::from("TLSv1.1"), String::from("TLSv1.3")];
    config.cipher_suites = vec![String::from("TLS13_AES_256_GCM_SHA384")];
    config.reload_on_change = false;

    let context = TlsContext::builder(config).build().unwrap();
    assert_eq!(context.protocol_versions(), vec!["TLSv1.3"]);
    assert_eq!(context.cipher_suites(), vec![String::from("TLS13_AES_256_GCM_SHA384")]);
}

#[test]
fn test_client_auth_need() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("server.pem");
    let server = self_signed();
    let client = self_signed();
    write_combined(&store, &server);
    write_trust(&dir.path().join("trust.pem"), &[&client]);

    let mut config = ssl_config(&store);
    config.client_auth = ClientAuth::need;
    config.trust_store = Some(SecurityStoreConfig::pem(&path_string(dir.path().join("trust.pem")), None));
    config.reload_on_change = false;
    let context = TlsContext::builder(config).build().unwrap();

    assert!(handshake(context.server_config(), client_config(&[&server], Some(&client)), "localhost").is_ok());
    assert!(handshake(context.server_config(), client_config(&[&server], None), "localhost").is_err());
    let stranger = self_signed();
    assert!(handshake(context.server_config(), client_config(&[&server], Some(&stranger)), "localhost").is_err());
}

#[test]
fn test_client_auth_want_allows_anonymous() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("server.pem");
    let server = self_signed();
    write_combined(&store, &server);
    write_trust(&dir.path().join("trust.pem"), &[&server]);

    let mut config = ssl_config(&store);
    config.client_auth = ClientAuth::want;
    config.trust_store = Some(SecurityStoreConfig::pem(&path_string(dir.path().join("trust.pem")), None));
    config.reload_on_change = false;
    let context = TlsContext::builder(config).build().unwrap();
    assert!(handshake(context.server_config(), client_config(&[&server], None), "localhost").is_ok());
}

#[test]
fn test_client_auth_without_trust_store() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("server.pem");
    write_combined(&store, &self_signed());
    let mut config = ssl_config(&store);
    config.client_auth = ClientAuth::need;
    assert!(matches!(TlsContext::builder(config).build(), Err(SslError::MissingTrustAnchors(_))));
}

#[test]
fn test_hot_reload_swaps_generation() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("server.pem");
    let first = self_signed();
    let second = self_signed();
    write_combined(&store, &first);

    let context = TlsContext::builder(ssl_config(&store)).build().unwrap();
    write_combined(&store, &second);
    assert!(wait_until(WAIT_TIMEOUT, || context.current_generation().is_some_and(|generation| generation.id == 2)));

    let chain = handshake(context.server_config(), client_config(&[&first, &second], None), "localhost").unwrap();
    assert_eq!(chain[0], second.cert_der);
    assert!(context.last_load_failure().is_none());
    context.shutdown();
}

#[test]
fn test_failed_reload_keeps_previous_generation() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("server.pem");
    let first = self_signed();
    let second = self_signed();
    write_combined(&store, &first);

    let context = TlsContext::builder(ssl_config(&store)).build().unwrap();
    atomic_write(&store, second.cert_pem.as_bytes());
    assert!(wait_until(WAIT_TIMEOUT, || context.last_load_failure().is_some()));
    assert_eq!(context.current_generation().unwrap().id, 1);
    let chain = handshake(context.server_config(), client_config(&[&first], None), "localhost").unwrap();
    assert_eq!(chain[0], first.cert_der);

    write_combined(&store, &second);
    assert!(wait_until(WAIT_TIMEOUT, || context.last_load_failure().is_none()));
    assert!(context.current_generation().unwrap().id >= 2);
    assert!(context.is_watching());
    context.shutdown();
}

#[test]
fn test_separate_key_rotation_waits_for_matching_key() {
    let dir = TempDir::new().unwrap();
    let cert_path = dir.path().join("cert.pem");
    let key_path = dir.path().join("key.pem");
    let first = self_signed();
    let second = self_signed();
    fs::write(&cert_path, &first.cert_pem).unwrap();
    fs::write(&key_path, &first.key_pem).unwrap();

    let mut config = ssl_config(&cert_path);
    config.key_store = Some(SecurityStoreConfig::pem(&path_string(&cert_path), Some(&path_string(&key_path))));
    let context = TlsContext::builder(config).build().unwrap();
    assert!(context.is_watching());

    atomic_write(&cert_path, second.cert_pem.as_bytes());
    assert!(wait_until(WAIT_TIMEOUT, || context.last_load_failure().is_some()));
    assert!(matches!(context.last_load_failure().as_deref(), Some(SslError::KeyMismatch(_))));
    assert_eq!(context.current_generation().unwrap().id, 1);
    let chain = handshake(context.server_config(), client_config(&[&first], None), "localhost").unwrap();
    assert_eq!(chain[0], first.cert_der);

    atomic_write(&key_path, second.key_pem.as_bytes());
    assert!(wait_until(WAIT_TIMEOUT, || context.current_generation().is_some_and(|generation| generation.id == 2)));
    assert!(context.last_load_failure().is_none());
    let chain = handshake(context.server_config(), client_config(&[&second], None), "localhost").unwrap();
    assert_eq!(chain[0], second.cert_der);
    context.shutdown();
}

#[test]
fn test_manual_reload() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("server.pem");
    write_combined(&store, &self_signed());
    let mut config = ssl_config(&store);
    config.reload_on_change = false;
    let context = TlsContext::builder(config).build().unwrap();

    fs::write(&store, "not a certificate").unwrap();
    assert!(context.reload().is_err());
    assert!(context.last_load_failure().is_some());
    write_combined(&store, &self_signed());
    assert_eq!(context.reload().unwrap(), 2);
    assert!(context.last_load_failure().is_none());
}

#[test]
fn test_handshakes_never_mix_generations() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("server.pem");
    let generations: Vec<_> = (0..4).map(|_| self_signed()).collect();
    write_combined(&store, &generations[0]);

    let context = Arc::new(TlsContext::builder(ssl_config(&store)).build().unwrap());
    let trusted: Vec<_> = generations.iter().collect();
    let client = client_config(&trusted, None);
    let known: Vec<_> = generations.iter().map(|generated| generated.cert_der.clone()).collect();
    let done = Arc::new(AtomicBool::new(false));

    let workers: Vec<_> = (0..4)
        .map(|_| {
            let context = Arc::clone(&context);
            let client = Arc::clone(&client);
            let known = known.clone();
            let done = Arc::clone(&done);
            thread::spawn(move || {
                let mut handshakes = 0;
                while !done.load(Ordering::SeqCst) {
                    // a certificate paired with the wrong key fails the handshake
                    let chain = handshake(context.server_config(), Arc::clone(&client), "localhost").unwrap();
                    assert!(known.contains(&chain[0]));
                    handshakes += 1;
                }
                handshakes
            })
        })
        .collect();

    for (index, generated) in generations.iter().enumerate().skip(1) {
        write_combined(&store, generated);
        let expected = index as u64 + 1;
        assert!(wait_until(WAIT_TIMEOUT, || context.current_generation().is_some_and(|generation| generation.id >= expected)));
    }
    done.store(true, Ordering::SeqCst);
    for worker in workers {
        assert!(worker.join().unwrap() > 0);
    }
    context.shutdown();
}

#[test]
fn test_watch_location_overrides_key_store_path() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("server.pem");
    let trigger = dir.path().join("rotated");
    write_combined(&store, &self_signed());
    fs::write(&trigger, "0").unwrap();

    let mut config = ssl_config(&store);
    config.watch_location = Some(path_string(trigger.clone()));
    let context = TlsContext::builder(config).build().unwrap();

    write_combined(&store, &self_signed());
    atomic_write(&trigger, b"1");
    assert!(wait_until(WAIT_TIMEOUT, || context.current_generation().is_some_and(|generation| generation.id >= 2)));
    context.shutdown();
}

#[test]
fn test_client_config_endpoint_identification() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("server.pem");
    let generated = self_signed();
    write_combined(&store, &generated);
    write_trust(&dir.path().join("trust.pem"), &[&generated]);

    let mut config = ssl_config(&store);
    config.trust_store = Some(SecurityStoreConfig::pem(&path_string(dir.path().join("trust.pem")), None));
    config.reload_on_change = false;
    let strict = TlsContext::builder(config.clone()).build().unwrap();
    assert_eq!(strict.endpoint_identification(), EndpointIdentification::Https);
    let client = strict.client_config().unwrap();
    assert!(handshake(strict.server_config(), Arc::clone(&client), "localhost").is_ok());
    assert!(handshake(strict.server_config(), client, "other.example.org").is_err());

    config.endpoint_identification_algorithm = String::new();
    let relaxed = TlsContext::builder(config).build().unwrap();
    let client = relaxed.client_config().unwrap();
    assert!(handshake(relaxed.server_config(), client, "other.example.org").is_ok());
}

#[test]
fn test_spiffe_identity_mutual_tls() {
    let dir = TempDir::new().unwrap();
    let svid = write_svid(dir.path(), "spiffe://example.org/api");

    let mut config = ssl_config(&dir.path().join("unused.pem"));
    config.client_auth = ClientAuth::need;
    config.spiffe = SpiffeConfig {
        enabled: true,
        svid_dir: path_string(dir.path().to_path_buf()),
        authorized_ids: vec![String::from("spiffe://example.org/api")],
        ..SpiffeConfig::default()
    };
    let context = TlsContext::builder(config.clone()).build().unwrap();
    assert!(context.current_generation().is_none());

    let chain = handshake(context.server_config(), context.client_config().unwrap(), "localhost").unwrap();
    assert_eq!(spiffe_id_from_certificate(chain[0].as_ref()).unwrap().to_string(), "spiffe://example.org/api");
    assert!(handshake(context.server_config(), client_config(&[&svid], None), "localhost").is_err());
    context.shutdown();

    config.spiffe.authorized_ids = vec![String::from("spiffe://example.org/billing")];
    let denying = TlsContext::builder(config).build().unwrap();
    assert!(handshake(denying.server_config(), denying.client_config().unwrap(), "localhost").is_err());
    denying.shutdown();
}

#[test]
fn test_spiffe_custom_authorizer() {
    let dir = TempDir::new().unwrap();
    write_svid(dir.path(), "spiffe://example.org/api");
    let mut config = ssl_config(&dir.path().join("unused.pem"));
    config.key_store = None;
    config.client_auth = ClientAuth::need;
    config.spiffe.enabled = true;
    config.spiffe.svid_dir = path_string(dir.path().to_path_buf());

    let context = TlsContext::builder(config)
        .with_authorizer(Arc::new(|id: &SpiffeId| id.path() == "/api"))
        .build()
        .unwrap();
    assert!(handshake(context.server_config(), context.client_config().unwrap(), "localhost").is_ok());
    context.shutdown();
}

#[test]
fn test_spiffe_missing_directory_is_fatal() {
    let mut config = ssl_config(std::path::Path::new("/nonexistent/server.pem"));
    config.spiffe.enabled = true;
    config.spiffe.svid_dir = String::from("/nonexistent/spiffe");
    assert!(matches!(TlsContext::builder(config).build(), Err(SslError::Identity(_))));
}

#[test]
fn test_workload_socket_needs_connect() {
    let dir = TempDir::new().unwrap();
    write_svid(dir.path(), "spiffe://example.org/api");
    let mut config = ssl_config(&dir.path().join("unused.pem"));
    config.key_store = None;
    config.spiffe.enabled = true;
    config.spiffe.svid_dir = path_string(dir.path());
    config.spiffe.socket_path = Some(path_string(dir.path().join("agent.sock")));
    assert!(matches!(TlsContext::builder(config).build(), Err(SslError::InvalidConfig(_))));
}

#[tokio::test]
async fn test_connect_workload_api_missing_socket() {
    let dir = TempDir::new().unwrap();
    let mut config = ssl_config(&dir.path().join("unused.pem"));
    config.key_store = None;
    config.spiffe.enabled = true;
    config.spiffe.socket_path = Some(path_string(dir.path().join("agent.sock")));
    let result = TlsContext::builder(config).connect_workload_api().await;
    assert!(matches!(result, Err(SslError::Identity(IdentityError::SocketNotFound(_)))));

    let disabled = TlsContext::builder(ssl_config(&dir.path().join("unused.pem"))).connect_workload_api().await.unwrap();
    assert_eq!(disabled.state(), BuildState::Unconfigured);
}
