mod config;
mod domain;
mod inbound;
mod outbound;

use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::Config::from_env()?;

    // A minimal tracing middleware for request logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("connecting to document store at {}", config.db_host);
    let ad_store =
        outbound::repositories::MongoAdStore::connect(&config.db_host, &config.db_name).await?;

    let metrics = outbound::metrics::NullMetrics;
    let ad_service = domain::service::Service::new(ad_store.clone(), metrics);

    let server_config = inbound::HttpServerConfig {
        port: &config.server_port,
    };
    let http_server = inbound::HttpServer::new(ad_service, server_config).await?;

    http_server.run().await?;

    // Listener first, store second: requests already accepted may still complete or fail
    // naturally against the closing store.
    ad_store.close().await;
    info!("document store connection released");

    Ok(())
}
