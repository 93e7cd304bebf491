//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::BlogSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::{Clock, DefaultClock};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use blog_backend::Trace;
#[cfg(debug_assertions)]
use blog_backend::doc::ApiDoc;
use blog_backend::inbound::http::configure;
use blog_backend::inbound::http::health::{HealthState, live, ready};
use blog_backend::inbound::http::state::HttpState;
use blog_backend::outbound::security::JwtTokenService;

use state_builders::{build_http_state, build_storage};

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
        .configure(configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server from the loaded settings.
///
/// # Errors
/// Propagates [`std::io::Error`] when the signing secret, storage, or socket
/// binding cannot be set up.
pub async fn create_server(
    health_state: web::Data<HealthState>,
    settings: BlogSettings,
) -> std::io::Result<Server> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let secret = settings.signing_secret()?;
    let tokens = Arc::new(JwtTokenService::new(
        &secret,
        settings.token_ttl(),
        Arc::clone(&clock),
    ));
    let adapters = build_storage(&settings).await?;
    let http_state = web::Data::new(build_http_state(adapters, tokens, clock));
    let bind_addr = settings
        .bind_addr()
        .map_err(|err| std::io::Error::other(format!("invalid bind address: {err}")))?;

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
