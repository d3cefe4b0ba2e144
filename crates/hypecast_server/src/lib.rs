//! HTTP API server for Hypecast.
//!
//! Exposes content generation and history over a small JSON API:
//!
//! - `POST /api/generate` — single-shot, fan-out, or template generation
//! - `GET /api/categories` — the supported content archetypes
//! - `GET /api/history`, `GET /api/content/{id}`, `DELETE /api/content/{id}`
//! - `GET /api/stats` — usage statistics
//!
//! # Example
//!
//! ```rust,no_run
//! use hypecast_server::{ApiState, ServerConfig, serve};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     let state = ApiState::new();
//!     serve(&config, state).await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod server;

pub use api::{ApiState, create_router};
pub use config::ServerConfig;
pub use server::serve;
