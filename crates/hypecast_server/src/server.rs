//! Server startup.

use crate::{ApiState, ServerConfig, create_router};
use hypecast_error::{HypecastResult, ServerError, ServerErrorKind};
use tracing::info;

/// Bind the configured address and serve the API until shutdown.
pub async fn serve(config: &ServerConfig, state: ApiState) -> HypecastResult<()> {
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind {
            addr: addr.clone(),
            message: e.to_string(),
        })
    })?;
    info!(%addr, "listening");

    axum::serve(listener, create_router(state))
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())).into())
}
