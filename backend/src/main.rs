//! Service entry point: loads settings, installs logging and runs the
//! HTTP server.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{AppSettings, ServerConfig, create_server};
use userbase::inbound::http::health::HealthState;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let settings = AppSettings::load().map_err(|err| eyre!("failed to load settings: {err}"))?;
    let config = ServerConfig::from(&settings);

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)
        .await
        .wrap_err("failed to start HTTP server")?;
    server.await.wrap_err("HTTP server stopped with an error")?;

    health_state.mark_unhealthy();
    info!("server shut down");
    Ok(())
}
