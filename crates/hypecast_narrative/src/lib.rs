//! Response parsing, prompt assembly, and category fan-out.
//!
//! This crate implements the generation core:
//!
//! - [`parse_response`] — split a free-text completion into a structured
//!   [`hypecast_core::GeneratedContent`] record using fixed section
//!   markers, with a deterministic fallback ladder for missing or
//!   malformed sections. Total function; it never fails.
//! - [`AiGenerator`] — single-shot generation: enrich, prompt, complete,
//!   parse.
//! - [`FanoutGenerator`] — one completion request per content category,
//!   individual failures skipped, results in enumeration order.
//! - [`TemplateGenerator`] — offline deterministic generation used when
//!   no completion service is configured.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod fanout;
mod generator;
mod parser;
mod prompt;
mod template;

pub use fanout::FanoutGenerator;
pub use generator::AiGenerator;
pub use parser::{DEFAULT_CTAS, DEFAULT_HASHTAGS, parse_response};
pub use prompt::{build_category_prompt, build_single_prompt, resolve_context};
pub use template::TemplateGenerator;
