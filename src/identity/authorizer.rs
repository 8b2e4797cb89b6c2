use std::sync::Arc;
use spiffe_rustls::{Authorizer, authorizer};
use crate::config::structs::spiffe_config::SpiffeConfig;
use crate::identity::enums::identity_error::IdentityError;

/// Accepts every peer whose certificate chain verified.
pub fn any() -> Arc<dyn Authorizer> {
    Arc::new(authorizer::any())
}

pub fn exact<I, S>(ids: I) -> Result<Arc<dyn Authorizer>, IdentityError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let ids: Vec<String> = ids.into_iter().map(|id| id.as_ref().to_string()).collect();
    let exact = authorizer::exact(ids.iter().map(String::as_str)).map_err(|e| IdentityError::InvalidSpiffeId(ids.join(", "), e.to_string()))?;
    Ok(Arc::new(exact))
}

/// Trust domains may be given bare (`example.org`) or as `spiffe://example.org`.
pub fn trust_domains<I, S>(domains: I) -> Result<Arc<dyn Authorizer>, IdentityError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let domains: Vec<String> = domains
        .into_iter()
        .map(|domain| {
            let domain = domain.as_ref();
            domain.strip_prefix("spiffe://").unwrap_or(domain).to_string()
        })
        .collect();
    let trust_domains = authorizer::trust_domains(domains.iter().map(String::as_str))
        .map_err(|e| IdentityError::InvalidSpiffeId(domains.join(", "), e.to_string()))?;
    Ok(Arc::new(trust_domains))
}

/// Exact IDs win over trust domains, no restriction at all means `any`.
pub fn from_config(config: &SpiffeConfig) -> Result<Arc<dyn Authorizer>, IdentityError> {
    if !config.authorized_ids.is_empty() {
        exact(&config.authorized_ids)
    } else if !config.authorized_trust_domains.is_empty() {
        trust_domains(&config.authorized_trust_domains)
    } else {
        Ok(any())
    }
}
