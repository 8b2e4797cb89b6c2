use log::warn;
use rustls::crypto::CryptoProvider;
use rustls::{SupportedCipherSuite, SupportedProtocolVersion};
use crate::ssl::enums::ssl_error::SslError;

/// Protocol names rustls recognizes but will never negotiate.
const LEGACY_PROTOCOLS: [&str; 4] = ["SSLV2HELLO", "SSLV3", "TLSV1", "TLSV1.1"];

pub fn version_by_name(name: &str) -> Option<&'static SupportedProtocolVersion> {
    match name.to_ascii_uppercase().as_str() {
        "TLSV1.3" => Some(&rustls::version::TLS13),
        "TLSV1.2" => Some(&rustls::version::TLS12),
        _ => None,
    }
}

pub fn version_name(version: &SupportedProtocolVersion) -> &'static str {
    if version.version == rustls::version::TLS13.version {
        "TLSv1.3"
    } else {
        "TLSv1.2"
    }
}

/// Versions allowed by `protocol`, narrowed to `enabled` when that list is not empty.
pub fn protocol_versions(protocol: &str, enabled: &[String]) -> Result<Vec<&'static SupportedProtocolVersion>, SslError> {
    let allowed: Vec<&'static SupportedProtocolVersion> = match protocol.to_ascii_uppercase().as_str() {
        "" | "TLS" => vec![&rustls::version::TLS13, &rustls::version::TLS12],
        "TLSV1.3" => vec![&rustls::version::TLS13],
        "TLSV1.2" => vec![&rustls::version::TLS12],
        _ => return Err(SslError::InvalidConfig(format!("unsupported protocol '{}'", protocol))),
    };
    if enabled.is_empty() {
        return Ok(allowed);
    }

    let mut selected: Vec<&'static SupportedProtocolVersion> = Vec::new();
    for name in enabled {
        match version_by_name(name) {
            Some(version) => {
                let permitted = allowed.iter().any(|candidate| candidate.version == version.version);
                let duplicate = selected.iter().any(|candidate| candidate.version == version.version);
                if permitted && !duplicate {
                    selected.push(version);
                }
            }
            None if LEGACY_PROTOCOLS.contains(&name.to_ascii_uppercase().as_str()) => {
                warn!("[SSL] Protocol {} is not available, skipping it", name);
            }
            None => return Err(SslError::InvalidConfig(format!("unknown protocol '{}' in enabled_protocols", name))),
        }
    }
    if selected.is_empty() {
        return Err(SslError::InvalidConfig(format!(
            "enabled_protocols {:?} leaves no version allowed by protocol '{}'",
            enabled, protocol
        )));
    }
    Ok(selected)
}

pub fn cipher_suite_name(suite: &SupportedCipherSuite) -> String {
    format!("{:?}", suite.suite())
}

/// Copy of `provider` offering only the named suites. An empty list keeps every suite.
pub fn restrict_cipher_suites(provider: &CryptoProvider, allowed: &[String]) -> Result<CryptoProvider, SslError> {
    let mut restricted = provider.clone();
    if allowed.is_empty() {
        return Ok(restricted);
    }
    for name in allowed {
        if !provider.cipher_suites.iter().any(|suite| cipher_suite_name(suite).eq_ignore_ascii_case(name)) {
            return Err(SslError::InvalidConfig(format!("cipher suite '{}' is unknown or not offered by the provider", name)));
        }
    }
    restricted
        .cipher_suites
        .retain(|suite| allowed.iter().any(|name| cipher_suite_name(suite).eq_ignore_ascii_case(name)));
    Ok(restricted)
}
