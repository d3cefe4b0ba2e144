//! Hypecast - Multi-platform marketing copy generator.
//!
//! Hypecast turns a single topic into coordinated marketing copy for
//! YouTube, Instagram, and Twitter, either through an OpenRouter-backed
//! completion model or a deterministic offline template engine.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use hypecast::{AiGenerator, OpenRouterClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpenRouterClient::new("openai/gpt-3.5-turbo".to_string())?;
//!     let generator = AiGenerator::new(client);
//!     let content = generator.generate("New AI coding assistant", None, None).await?;
//!     println!("{}", content.master_storyline);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Hypecast is organized as a workspace with focused crates:
//!
//! - `hypecast_core` - Categories, narrative flows, and content records
//! - `hypecast_interface` - Driver, search, and repository traits
//! - `hypecast_error` - Error types
//! - `hypecast_models` - OpenRouter client and DuckDuckGo search
//! - `hypecast_narrative` - Response parsing, prompts, and fan-out
//! - `hypecast_database` - PostgreSQL persistence
//! - `hypecast_server` - HTTP API
//!
//! This crate (`hypecast`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use hypecast_core::{
    CompletionRequest, ContentCategory, GeneratedContent, NarrativeFlow, StoryBeat,
};
pub use hypecast_database::{
    PostgresContentRepository, build_pool, establish_connection, run_migrations,
};
pub use hypecast_error::{
    HypecastError, HypecastErrorKind, HypecastResult,
};
pub use hypecast_interface::{
    CompletionDriver, ContentRepository, ContentStats, HistoryEntry, SearchProvider,
};
pub use hypecast_models::{
    DuckDuckGoClient, MODEL_CATALOG, OpenRouterClient, model_id_for_name, model_names,
};
pub use hypecast_narrative::{
    AiGenerator, FanoutGenerator, TemplateGenerator, parse_response,
};
pub use hypecast_server::{ApiState, ServerConfig, create_router, serve};
