//! MongoDB connection bootstrap.

use std::time::Duration;

use anyhow::Context;
use mongodb::bson::doc;
use mongodb::Client;
use tokio::time::timeout;
use tracing::info;

/// How long startup may spend reaching the store before giving up.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Opens a client for `uri` and verifies liveness with a `ping`.
///
/// # Errors
///
/// Fails when the URI does not parse or the store does not answer within
/// [`CONNECT_TIMEOUT`]. The caller treats either as fatal: a process that
/// cannot reach its store should not start serving.
pub async fn connect(uri: &str) -> anyhow::Result<Client> {
    let client = Client::with_uri_str(uri)
        .await
        .context("invalid MongoDB connection string")?;

    timeout(
        CONNECT_TIMEOUT,
        client.database("admin").run_command(doc! { "ping": 1 }),
    )
    .await
    .context("MongoDB ping timed out")?
    .context("MongoDB ping failed")?;

    info!("connected to MongoDB");
    Ok(client)
}
