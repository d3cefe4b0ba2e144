//! Trait definitions for the Hypecast content engine.
//!
//! This crate provides the seams between the generation core and its
//! external collaborators: the completion service, the search
//! enrichment service, and the persistence store.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{CompletionDriver, ContentRepository, SearchProvider};
pub use types::{ContentStats, HistoryEntry};
