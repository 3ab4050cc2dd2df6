//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::{AppSettings, ServerConfig};

use state_builders::{build_http_state, seed_demo_data};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use userbase::Trace;
#[cfg(debug_assertions)]
use userbase::doc::ApiDoc;
use userbase::inbound::http::configure_api;
use userbase::inbound::http::health::{HealthState, live, ready};
use userbase::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(web::scope("/api/v1").configure(configure_api))
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Build state, optionally seed it and bind the HTTP server.
///
/// The returned [`Server`] must be awaited to drive the listener.
///
/// # Errors
/// Returns [`std::io::Error`] when seeding fails or the socket cannot be
/// bound.
pub async fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let state = build_http_state(&config);
    if config.seed_demo_data {
        seed_demo_data(&state)
            .await
            .map_err(|err| std::io::Error::other(format!("demo data seeding failed: {err}")))?;
    }
    let http_state = web::Data::new(state);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr)?
    .run();

    info!(
        addr = %config.bind_addr,
        max_write_attempts = config.max_write_attempts,
        "server listening"
    );
    health_state.mark_ready();
    Ok(server)
}
