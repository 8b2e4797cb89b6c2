use crate::config::structs::http_server_config::HttpServerConfig;

impl Default for HttpServerConfig {
    fn default() -> Self {
        HttpServerConfig {
            bind_address: String::from("0.0.0.0:8443"),
            threads: None,
            keep_alive: 60,
            request_timeout: 30,
            disconnect_timeout: 30,
            max_connections: 25000,
        }
    }
}
