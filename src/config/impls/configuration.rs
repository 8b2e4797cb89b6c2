use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use regex::Regex;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::enums::store_type::StoreType;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::dos_config::DosConfig;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::security_store_config::SecurityStoreConfig;
use crate::config::structs::sni_config::SniConfig;
use crate::config::structs::ssl_config::SslConfig;

const PROVIDER_NAME_REGEX: &str = r"^[a-z0-9][a-z0-9-]{0,31}$";
const HOST_HEADER_REGEX: &str = r"^[A-Za-z0-9*]([A-Za-z0-9.-]{0,252})(:[0-9]{1,5})?$";

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            server: HttpServerConfig::default(),
            ssl: SslConfig::default(),
            sni: SniConfig::default(),
            dos: DosConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigurationError> {
        toml::to_string(self).map_err(ConfigurationError::SerializeError)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new(&format!("will not create automatically {} file", path)));
                }
                eprintln!("Creating config file..");

                let config_toml = Configuration::init()
                    .to_toml()
                    .map_err(|e| CustomError::new(&format!("could not serialize default configuration: {e}")))?;
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit the {} file, exiting now...", path);
                        Err(CustomError::new(&format!("create {} file", path)))
                    }
                    Err(e) => {
                        eprintln!("{} file could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {} file", path)))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("[VALIDATE CONFIG] {}", error);
            return Err(CustomError::new(&error.to_string()));
        }
        Ok(config)
    }

    /// Checks the whole configuration and reports every problem found.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let mut problems = Vec::new();

        if parse_log_level(&self.log_level).is_none() {
            problems.push(format!("log_level: unknown level \"{}\"", self.log_level));
        }
        if self.server.bind_address.parse::<SocketAddr>().is_err() {
            problems.push(format!("server.bind_address: \"{}\" is not a socket address", self.server.bind_address));
        }

        self.validate_ssl(&mut problems);
        self.validate_sni(&mut problems);
        self.validate_dos(&mut problems);

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigurationError::ValidationError(problems))
        }
    }

    fn validate_ssl(&self, problems: &mut Vec<String>) {
        let ssl = &self.ssl;
        if !ssl.enabled {
            return;
        }
        if ssl.key_store.is_none() && !ssl.spiffe.enabled {
            problems.push(String::from("ssl: either ssl.key_store or ssl.spiffe must be configured"));
        }
        if let Some(store) = &ssl.key_store {
            Self::validate_store("ssl.key_store", store, ssl.fips_enabled, true, problems);
        }
        if let Some(store) = &ssl.trust_store {
            Self::validate_store("ssl.trust_store", store, ssl.fips_enabled, false, problems);
        }
        if ssl.client_auth.is_enabled() && ssl.trust_store.is_none() && !ssl.spiffe.enabled {
            problems.push(String::from("ssl.client_auth: client authentication needs ssl.trust_store or ssl.spiffe"));
        }
        if !Self::matches(PROVIDER_NAME_REGEX, &ssl.provider) {
            problems.push(format!("ssl.provider: invalid provider name \"{}\"", ssl.provider));
        }
        if !ssl.endpoint_identification_algorithm.is_empty() && !ssl.endpoint_identification_algorithm.eq_ignore_ascii_case("https") {
            problems.push(format!("ssl.endpoint_identification_algorithm: \"{}\" is not supported", ssl.endpoint_identification_algorithm));
        }
        if ssl.spiffe.enabled {
            if ssl.spiffe.workload_socket().is_none() && ssl.spiffe.svid_dir.is_empty() {
                problems.push(String::from("ssl.spiffe.svid_dir: must not be empty without ssl.spiffe.socket_path"));
            }
            for id in ssl.spiffe.authorized_ids.iter().filter(|id| !id.starts_with("spiffe://")) {
                problems.push(format!("ssl.spiffe.authorized_ids: \"{}\" is not a SPIFFE ID", id));
            }
        }
    }

    fn validate_store(name: &str, store: &SecurityStoreConfig, fips: bool, key_store: bool, problems: &mut Vec<String>) {
        if store.path.is_empty() {
            problems.push(format!("{}.path: must not be empty", name));
        }
        if fips && store.store_type != StoreType::pem {
            problems.push(format!("{}.store_type: FIPS mode only accepts PEM stores, got {}", name, store.store_type));
        }
        if key_store && store.store_type == StoreType::der && store.key_path.as_deref().unwrap_or("").is_empty() {
            problems.push(format!("{}.key_path: DER key stores need a separate key file", name));
        }
    }

    fn validate_sni(&self, problems: &mut Vec<String>) {
        for header in self.sni.expected_headers.iter().filter(|header| !Self::matches(HOST_HEADER_REGEX, header)) {
            problems.push(format!("sni.expected_headers: \"{}\" is not a host name", header));
        }
    }

    fn validate_dos(&self, problems: &mut Vec<String>) {
        let dos = &self.dos;
        let limits = [
            (dos.enabled, "dos.global_max_requests_per_sec", dos.global_max_requests_per_sec),
            (dos.per_connection_enabled, "dos.per_connection_max_requests_per_sec", dos.per_connection_max_requests_per_sec),
            (dos.per_tenant_enabled, "dos.per_tenant_max_requests_per_sec", dos.per_tenant_max_requests_per_sec),
        ];
        for (_, name, _) in limits.iter().filter(|(enabled, _, limit)| *enabled && *limit == 0) {
            problems.push(format!("{}: must be greater than zero", name));
        }
        if dos.any_enabled() && dos.delay_ms == 0 && dos.throttled_requests == 0 {
            problems.push(String::from("dos.throttled_requests: throttling needs at least one permit"));
        }
    }

    fn matches(regex: &str, value: &str) -> bool {
        Regex::new(regex).map(|check| check.is_match(value)).unwrap_or(false)
    }
}
