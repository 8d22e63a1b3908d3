mod config;
mod context;
mod pages;
mod scan_log;
mod services;

use crate::config::ServerConfig;
use crate::context::ServiceContext;
use crate::scan_log::ScanLog;
use actix_web::{web, App, HttpServer};
use chrono::Local;
use clap::Parser;
use checkpoint_common::network::{local_ipv4, service_url};
use env_logger::Env;
use log::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::parse();

    let log = ScanLog::new(config.log_path(Local::now().date_naive()));
    if let Err(err) = log.initialize() {
        error!("Error preparing scan log {}: {}", log.path().display(), err);
        return Err(std::io::Error::other(err));
    }
    info!("Recording scans to {}", log.path().display());

    let port = config.port;
    let context = web::Data::new(ServiceContext::new(log, port));
    print_banner(port);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(context.clone())
            .configure(services::configure)
    })
    .bind((config.bind.as_str(), port));

    let server = match server {
        Ok(server) => server,
        Err(err) => {
            error!("Failed to start server on {}:{}: {}", config.bind, port, err);
            info!("Try these solutions:");
            info!("1. Use a different port (--port or CHECKPOINT_PORT)");
            info!("2. Run with permission to bind the port");
            info!("3. Check for conflicting applications");
            return Err(err);
        }
    };

    server.run().await
}

fn print_banner(port: u16) {
    let network_url = service_url(local_ipv4(), port);

    info!("{}", "=".repeat(50));
    info!("Local access: http://localhost:{}", port);
    info!("Network access: {}", network_url);
    info!("{}", "=".repeat(50));
    info!("Troubleshooting tips:");
    info!("1. Ensure both devices are on the same WiFi network");
    info!("2. Try accessing the network URL from your phone's browser first");
    info!("3. If connection fails, check your firewall/antivirus settings");
    info!("4. Make sure no other application is using port {}", port);
}
