//! Core data types for the Hypecast content engine.
//!
//! This crate provides the foundation data types shared across the
//! Hypecast workspace: the closed content-category enumeration, the
//! narrative flows that parameterize prompts, the `GeneratedContent`
//! record, and the completion request contract.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod category;
mod content;
mod flow;
mod request;

pub use category::ContentCategory;
pub use content::GeneratedContent;
pub use flow::{NarrativeFlow, StoryBeat};
pub use request::CompletionRequest;
