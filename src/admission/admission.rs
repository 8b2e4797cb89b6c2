use std::any::Any;
use std::time::Instant;
use actix_tls::accept::rustls_0_23::TlsStream;
use actix_web::dev::Extensions;
use actix_web::rt::net::TcpStream;
use log::trace;
use crate::admission::structs::connection_info::ConnectionInfo;

/// `HttpServer::on_connect` hook storing the negotiated SNI and the accept time.
pub fn record_connection_info(connection: &dyn Any, data: &mut Extensions) {
    let sni = connection
        .downcast_ref::<TlsStream<TcpStream>>()
        .and_then(|stream| stream.get_ref().1.server_name().map(str::to_string));
    trace!("[SNI] Connection accepted with server name {:?}", sni);
    data.insert(ConnectionInfo {
        sni,
        accepted_at: Instant::now(),
    });
}

/// Host without its port. Bracketed IPv6 literals lose their brackets, bare
/// IPv6 literals are returned unchanged.
pub fn strip_port(host: &str) -> &str {
    if let Some(rest) = host.strip_prefix('[') {
        return rest.split_once(']').map_or(rest, |(address, _)| address);
    }
    match host.split_once(':') {
        Some((name, port)) if !port.contains(':') => name,
        _ => host,
    }
}

/// First dot separated label, `None` when the name has no dot.
pub fn first_label(name: &str) -> Option<&str> {
    name.split_once('.').map(|(label, _)| label).filter(|label| !label.is_empty())
}
