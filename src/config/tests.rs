#[cfg(test)]
mod config_tests {
    mod enum_tests {
        use crate::config::enums::client_auth::ClientAuth;
        use crate::config::enums::sni_mode::SniMode;
        use crate::config::enums::store_type::StoreType;

        #[test]
        fn test_store_type_default() {
            assert_eq!(StoreType::default(), StoreType::pem);
            assert!(StoreType::pem.is_pem());
            assert!(!StoreType::der.is_pem());
        }

        #[test]
        fn test_client_auth_flags() {
            assert!(!ClientAuth::none.is_enabled());
            assert!(ClientAuth::want.is_enabled());
            assert!(!ClientAuth::want.is_required());
            assert!(ClientAuth::need.is_required());
        }

        #[test]
        fn test_sni_mode_deserialization() {
            #[derive(serde::Deserialize)]
            struct Holder {
                mode: SniMode,
            }
            let holder: Holder = toml::from_str("mode = \"tenant_prefix\"").unwrap();
            assert_eq!(holder.mode, SniMode::tenant_prefix);
        }
    }

    mod configuration_tests {
        use std::path::PathBuf;
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::enums::store_type::StoreType;
        use crate::config::structs::configuration::Configuration;
        use crate::config::structs::security_store_config::SecurityStoreConfig;

        #[test]
        fn test_init_is_valid() {
            let config = Configuration::init();
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_init_round_trips_through_toml() {
            let config = Configuration::init();
            let serialized = config.to_toml().unwrap();
            let loaded = Configuration::load(serialized.as_bytes()).unwrap();
            assert_eq!(loaded.server.bind_address, config.server.bind_address);
            assert_eq!(loaded.ssl.coalesce_window_ms, 250);
            assert_eq!(loaded.dos.delay_ms, -1);
        }

        #[test]
        fn test_partial_file_uses_defaults() {
            let config = Configuration::load(b"log_level = \"debug\"\n[ssl]\nenabled = true\nfips_enabled = true\n").unwrap();
            assert_eq!(config.log_level, "debug");
            assert!(config.ssl.fips_enabled);
            assert_eq!(config.ssl.provider, "ring");
            assert!(!config.dos.enabled);
        }

        #[test]
        fn test_validate_collects_every_problem() {
            let mut config = Configuration::init();
            config.log_level = String::from("loud");
            config.server.bind_address = String::from("nowhere");
            config.ssl.enabled = true;
            config.ssl.fips_enabled = true;
            config.ssl.key_store = Some(SecurityStoreConfig::der("cert.der", None));
            match config.validate() {
                Err(ConfigurationError::ValidationError(problems)) => {
                    assert_eq!(problems.len(), 4, "{problems:?}");
                    assert!(problems.iter().any(|p| p.contains("FIPS")));
                    assert!(problems.iter().any(|p| p.contains("key_path")));
                }
                other => panic!("expected validation error, got {other:?}"),
            }
        }

        #[test]
        fn test_validate_client_auth_needs_trust_anchors() {
            let mut config = Configuration::init();
            config.ssl.enabled = true;
            config.ssl.client_auth = crate::config::enums::client_auth::ClientAuth::need;
            assert!(config.validate().is_err());
            config.ssl.trust_store = Some(SecurityStoreConfig::pem("ca.pem", None));
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_validate_dos_limits() {
            let mut config = Configuration::init();
            config.dos.per_tenant_enabled = true;
            config.dos.per_tenant_max_requests_per_sec = 0;
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_watched_paths_include_separate_key() {
            let mut config = Configuration::init();
            assert_eq!(config.ssl.watched_key_store_paths(), vec![PathBuf::from("cert.pem"), PathBuf::from("key.pem")]);

            config.ssl.key_store = Some(SecurityStoreConfig::pem("combined.pem", None));
            assert_eq!(config.ssl.watched_key_store_paths(), vec![PathBuf::from("combined.pem")]);

            config.ssl.watch_location = Some(String::from("/etc/certs/..data"));
            assert_eq!(config.ssl.watched_key_store_paths(), vec![PathBuf::from("/etc/certs/..data")]);

            config.ssl.watch_location = None;
            config.ssl.key_store = None;
            assert!(config.ssl.watched_key_store_paths().is_empty());
        }

        #[test]
        fn test_with_path_keeps_store_settings() {
            let mut store = SecurityStoreConfig::der("a.der", Some("a.key"));
            store.password = Some(String::from("secret"));
            let rotated = store.with_path("b.der");
            assert_eq!(rotated.path, "b.der");
            assert_eq!(rotated.store_type, StoreType::der);
            assert_eq!(rotated.password.as_deref(), Some("secret"));
            assert_eq!(rotated.key_path.as_deref(), Some("a.key"));
        }
    }
}
