/// Every request shares one key.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalKey;

/// Remote IP address, the default per-client key.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoteIpKey;

/// Remote socket address, one key per connection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectionKey;

/// First label of the Host header.
#[derive(Debug, Clone, Copy, Default)]
pub struct TenantFromHost;

/// Path segment following `segment_after`, or the first segment when unset.
#[derive(Debug, Clone, Default)]
pub struct TenantFromPath {
    pub segment_after: Option<String>,
}
