//! Job tracker JSON API Server

use std::{process, sync::Arc};

use salvo::{
    affix_state::inject,
    oapi::{
        OpenApi,
        security::{Http, HttpAuthScheme, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use jobtrack_app::{
    context::{AppContext, AppInitError},
    identity::{PlaceholderOwnerResolver, models::OwnerId},
};

use crate::{
    config::ServerConfig,
    errors::json_errors,
    observability::{metrics_handler, request_logging},
    state::State,
};

mod config;
mod cors;
mod dashboard;
mod errors;
mod extensions;
mod healthcheck;
mod identity;
mod jobs;
mod observability;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Job tracker JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Observability error: {init_error}");
        }

        process::exit(1);
    }

    let app = match build_app_context(&config).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let addr = config.socket_addr();

    info!(
        store_backend = ?config.store.store_backend,
        "Starting server on {addr}"
    );

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app)))
        .get(dashboard::handler)
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(router::jobs_router());

    let doc = OpenApi::new("Job Tracker API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
        .merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let service = Service::new(router)
        .hoop(cors::handler())
        .hoop(request_logging)
        .hoop(json_errors);

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(service).await;
}

async fn build_app_context(config: &ServerConfig) -> Result<AppContext, AppInitError> {
    let owners = Arc::new(PlaceholderOwnerResolver::new(OwnerId::from(
        config.identity.placeholder_owner_id.as_str(),
    )));

    match config.store.postgres_url() {
        Some(url) => {
            AppContext::from_database_url(url, config.store.database_run_migrations, owners).await
        }
        None => Ok(AppContext::in_memory(owners)),
    }
}
