//! Server command handler.

use hypecast_core::CompletionRequest;
use hypecast_database::{PostgresContentRepository, build_pool, establish_connection, run_migrations};
use hypecast_error::{DatabaseError, DatabaseErrorKind, HypecastResult};
use hypecast_interface::{CompletionDriver, SearchProvider};
use hypecast_models::{DuckDuckGoClient, OpenRouterClient};
use hypecast_server::{ApiState, ServerConfig, serve};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Compose the API state from the environment and start the server.
///
/// Both the completion driver and the database are optional at startup:
/// a missing `OPENROUTER_API_KEY` leaves template generation only, and a
/// missing `DATABASE_URL` disables history endpoints.
pub async fn run_server(config_path: Option<PathBuf>, port: Option<u16>) -> HypecastResult<()> {
    let mut config = match config_path {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::from_env()?,
    };
    if let Some(port) = port {
        config.port = port;
    }

    let mut state = ApiState::new();
    if let Some(model) = &config.model {
        state = state.with_model(model.clone());
    }

    let model = config
        .model
        .clone()
        .unwrap_or_else(|| CompletionRequest::DEFAULT_MODEL.to_string());
    match OpenRouterClient::new(model) {
        Ok(client) => {
            let driver: Arc<dyn CompletionDriver> = Arc::new(client);
            let search: Arc<dyn SearchProvider> = Arc::new(DuckDuckGoClient::new());
            state = state.with_driver(driver, Some(search));
            info!("completion driver configured");
        }
        Err(error) => {
            warn!(%error, "completion service unavailable, template generation only");
        }
    }

    match build_pool() {
        Ok(pool) => {
            migrate().await?;
            state = state.with_repository(Arc::new(PostgresContentRepository::new(pool)));
            info!("content store configured");
        }
        Err(error) => {
            warn!(%error, "database unavailable, history endpoints disabled");
        }
    }

    serve(&config, state).await
}

async fn migrate() -> HypecastResult<()> {
    tokio::task::spawn_blocking(|| {
        let mut conn = establish_connection()?;
        run_migrations(&mut conn)
    })
    .await
    .map_err(|e| DatabaseError::new(DatabaseErrorKind::Migration(e.to_string())))?
}
