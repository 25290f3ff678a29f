use anyhow::Context;
use axum::{routing::get, Extension, Router};
use data_portal::engine::{EsClient, SearchEngine};
use data_portal::portal::handlers::{handle_portal_details, handle_portal_search};
use data_portal::portal::portal_schema;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let es_url = std::env::var("ES_URL").context("ES_URL must be set")?;
    let es_username = std::env::var("ES_USERNAME").ok();
    let es_password = std::env::var("ES_PASSWORD").ok();
    let bind_addr: SocketAddr = std::env::var("BIND")
        .unwrap_or_else(|_| "127.0.0.1:8000".to_string())
        .parse()
        .context("BIND must be an addr:port")?;

    // 1. Engine client, shared by every request for the process lifetime:
    let engine: Arc<dyn SearchEngine> = Arc::new(EsClient::new(&es_url, es_username, es_password));
    tracing::info!("Search engine endpoint: {}", es_url);

    // 2. Dataset schema, built once from its static field list:
    let schema = Arc::new(portal_schema());
    tracing::info!(
        "Serving dataset {} with filterable fields {:?}",
        schema.name,
        schema.filterable_fields()
    );

    // 3. HTTP Router:
    let app = Router::new()
        .route("/data_portal", get(handle_portal_search))
        .route("/data_portal/:record_id", get(handle_portal_details))
        .layer(Extension(engine))
        .layer(Extension(schema));

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
