use arc_swap::ArcSwapOption;
use crate::ssl::enums::ssl_error::SslError;

#[derive(Default)]
pub struct LoadFailureSlot {
    pub(crate) slot: ArcSwapOption<SslError>,
}
