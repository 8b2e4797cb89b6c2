use std::sync::Arc;
use rustls::client::WebPkiServerVerifier;

#[derive(Debug)]
pub struct RelaxedHostnameVerifier {
    pub(crate) inner: Arc<WebPkiServerVerifier>,
}
