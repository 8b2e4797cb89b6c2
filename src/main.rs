use std::fs;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use actix_web::{App, HttpResponse, HttpServer, web};
use clap::Parser;
use log::{error, info};
use rest_utils::admission::admission::record_connection_info;
use rest_utils::admission::structs::dos_filter_chain::DosFilterChain;
use rest_utils::admission::structs::dos_guard::DosGuard;
use rest_utils::admission::structs::sni_guard::SniGuard;
use rest_utils::admission::structs::sni_policy::SniPolicy;
use rest_utils::common::common::setup_logging;
use rest_utils::common::structs::custom_error::CustomError;
use rest_utils::config::structs::configuration::Configuration;
use rest_utils::ssl::cert_gen::generate_self_signed;
use rest_utils::ssl::structs::tls_context::TlsContext;
use rest_utils::structs::Cli;

async fn health() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}

fn cert_gen(args: &Cli) -> Result<(), CustomError> {
    info!("[CERTGEN] Requesting to generate a self-signed key and certificate file");
    let generated = generate_self_signed(std::slice::from_ref(&args.selfsigned_domain))
        .map_err(|e| CustomError::new(&e.to_string()))?;
    fs::write(&args.selfsigned_keyfile, &generated.key_pem)
        .map_err(|e| CustomError::new(&format!("the key file {} could not be generated: {}", args.selfsigned_keyfile, e)))?;
    fs::write(&args.selfsigned_certfile, &generated.cert_pem)
        .map_err(|e| CustomError::new(&format!("the cert file {} could not be generated: {}", args.selfsigned_certfile, e)))?;
    info!(
        "[CERTGEN] The files {} and {} have been generated, use them only for development",
        args.selfsigned_keyfile, args.selfsigned_certfile
    );
    Ok(())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101),
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("{}", error);
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if args.create_selfsigned {
        return match cert_gen(&args) {
            Ok(()) => Ok(()),
            Err(error) => {
                error!("[CERTGEN] {}", error);
                exit(1)
            }
        };
    }

    let context = if config.ssl.enabled {
        let built = TlsContext::builder(config.ssl.clone())
            .connect_workload_api()
            .await
            .and_then(|builder| builder.build());
        match built {
            Ok(context) => Some(Arc::new(context)),
            Err(error) => {
                error!("[BOOT] Unable to build the TLS context: {}", error);
                exit(1);
            }
        }
    } else {
        None
    };

    let sni_policy = Arc::new(SniPolicy::from_config(&config.sni));
    let dos_chain = Arc::new(DosFilterChain::from_config(&config.dos, None));
    let server_config = config.server.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(DosGuard::new(Arc::clone(&dos_chain)))
            .wrap(SniGuard::new(Arc::clone(&sni_policy)))
            .route("/health", web::get().to(health))
    })
        .keep_alive(Duration::from_secs(server_config.keep_alive))
        .client_request_timeout(Duration::from_secs(server_config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(server_config.disconnect_timeout))
        .max_connections(server_config.max_connections)
        .on_connect(record_connection_info);
    let server = match server_config.threads {
        Some(threads) => server.workers(threads as usize),
        None => server,
    };

    let server = match &context {
        Some(context) => {
            info!("[BOOT] Starting server listener with TLS on {}", server_config.bind_address);
            server.bind_rustls_0_23(server_config.bind_address.as_str(), context.server_config().as_ref().clone())?
        }
        None => {
            info!("[BOOT] Starting server listener on {}", server_config.bind_address);
            server.bind(server_config.bind_address.as_str())?
        }
    };

    let result = server.run().await;

    if let Some(context) = context {
        info!("[BOOT] Stopping credential watchers...");
        context.shutdown();
    }
    info!("[BOOT] Server stopped");
    result
}
