//! Provider clients for Hypecast.
//!
//! This crate implements the external collaborator contracts:
//!
//! - [`OpenRouterClient`] — text completions over OpenRouter's
//!   OpenAI-compatible chat API
//! - [`DuckDuckGoClient`] — topic enrichment via the DuckDuckGo Instant
//!   Answer API
//!
//! # Example
//!
//! ```no_run
//! use hypecast_models::OpenRouterClient;
//! use hypecast_interface::CompletionDriver;
//! use hypecast_core::CompletionRequest;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenRouterClient::new("openai/gpt-3.5-turbo".to_string())?;
//! let request = CompletionRequest::new("Write one sentence about Rust.");
//! let text = client.complete(&request).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod openrouter;
mod search;

pub use catalog::{MODEL_CATALOG, model_id_for_name, model_names};
pub use openrouter::OpenRouterClient;
pub use search::DuckDuckGoClient;
