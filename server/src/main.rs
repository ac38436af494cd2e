//! Process bootstrap: tracing, configuration, store connection, listener.

use std::sync::Arc;

use anyhow::Context;
use server::config::AppConfig;
use server::db;
use server::mongo::MongoTaskRepository;
use server::router::{app, AppState};
use server::service::TaskService;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();

    let client = db::connect(&config.mongo_uri).await?;
    let database = client.database(&config.db_name);

    let repo = MongoTaskRepository::new(&database, "tasks");
    let service = TaskService::new(Arc::new(repo));
    let router = app(AppState { service });

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("server running on port {}", config.port);
    axum::serve(listener, router).await?;

    Ok(())
}
