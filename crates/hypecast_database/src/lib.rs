//! PostgreSQL integration for Hypecast.
//!
//! This crate provides the diesel schema, row models, and the
//! [`PostgresContentRepository`] implementation of
//! [`hypecast_interface::ContentRepository`] over the content_history
//! table.
//!
//! # Example
//!
//! ```rust,ignore
//! use hypecast_database::{build_pool, PostgresContentRepository};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = build_pool()?;
//! let repo = PostgresContentRepository::new(pool);
//! let stats = repo.stats().await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod connection;
mod models;
mod repository;

pub mod schema;

pub use connection::{PgPool, build_pool, establish_connection, run_migrations};
pub use models::{ContentRow, NewContentRow};
pub use repository::PostgresContentRepository;
