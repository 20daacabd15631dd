/*
   Module `inbound` exposes the advertising domain over HTTP.

   [HttpServer] owns the bound listener and the route table. Binding happens in
   [HttpServer::new] so that a port conflict surfaces during startup rather than at serve
   time; [HttpServer::run] then accepts connections until a shutdown signal arrives.
*/

mod api;
mod handlers;

use anyhow::Context;
use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::domain::ports::AdService;

/// Configuration for [HttpServer].
#[derive(Debug, Clone)]
pub struct HttpServerConfig<'a> {
    pub port: &'a str,
}

/// The global application state shared between all request handlers.
#[derive(Debug, Clone)]
struct AppState<AS: AdService> {
    ad_service: AS,
}

/// The advertising HTTP server: two routes bound to one `ads` collection.
pub struct HttpServer {
    router: Router,
    listener: TcpListener,
}

impl HttpServer {
    /// Bind the listener and assemble the route table.
    pub async fn new(
        ad_service: impl AdService,
        config: HttpServerConfig<'_>,
    ) -> anyhow::Result<Self> {
        let state = AppState { ad_service };

        let router = api_routes()
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        let listener = TcpListener::bind(format!("0.0.0.0:{}", config.port))
            .await
            .with_context(|| format!("failed to listen on port {}", config.port))?;

        Ok(Self { router, listener })
    }

    /// Serve requests until a shutdown signal arrives, then stop accepting connections.
    ///
    /// In-flight requests are not cancelled; they complete on their own, or fail naturally
    /// once the caller releases the store connection behind them.
    pub async fn run(self) -> anyhow::Result<()> {
        tracing::info!(
            "advertising service listening on {}",
            self.listener
                .local_addr()
                .context("failed to read listener address")?,
        );

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("received error from running server")?;

        tracing::info!("listener stopped accepting connections");

        Ok(())
    }
}

fn api_routes<AS: AdService>() -> Router<AppState<AS>> {
    Router::new()
        .route("/getAds", get(handlers::get_ads_handler::<AS>))
        .route("/createAds", post(handlers::create_ads_handler::<AS>))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
}
