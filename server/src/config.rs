//! Environment-driven configuration.

use std::env;

use tracing::debug;

/// Startup knobs: listen port, store URI, store database name.
///
/// Each value comes from the environment, falling back to a development
/// default so a bare `cargo run` against a local MongoDB works.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: String,
    pub mongo_uri: String,
    pub db_name: String,
}

impl AppConfig {
    /// Reads configuration, loading a `.env` file first when one exists.
    #[must_use]
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_err() {
            debug!("no .env file found, using process environment only");
        }

        Self {
            port: env_or("PORT", "8080"),
            mongo_uri: env_or("MONGO_URI", "mongodb://localhost:27017"),
            db_name: env_or("DB_NAME", "taskdb"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
