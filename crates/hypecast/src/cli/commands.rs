//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hypecast - multi-platform marketing copy generator
#[derive(Parser, Debug)]
#[command(name = "hypecast")]
#[command(about = "Generate coordinated marketing copy for YouTube, Instagram, and Twitter", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Path to a TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Listen port, overriding config and environment
        #[arg(long)]
        port: Option<u16>,
    },

    /// Generate content for a topic and print it as JSON
    Generate {
        /// The topic to generate content for
        topic: String,

        /// Additional source material (a script or notes)
        #[arg(long)]
        context: Option<String>,

        /// Model name or identifier (see `hypecast models`)
        #[arg(long)]
        model: Option<String>,

        /// Generate one record for every category
        #[arg(long)]
        all: bool,

        /// Use the offline template engine instead of a completion model
        #[arg(long)]
        template: bool,

        /// Persist the generated content to the database
        #[arg(long)]
        save: bool,
    },

    /// List recent generations from the database
    History {
        /// Maximum number of entries to display
        #[arg(long, default_value = "10")]
        limit: i64,

        /// Filter by category identifier
        #[arg(long)]
        category: Option<String>,
    },

    /// Show a stored record by id
    Show {
        /// ID of the content record
        id: i32,
    },

    /// Delete a stored record by id
    Delete {
        /// ID of the content record
        id: i32,
    },

    /// List the known model names and identifiers
    Models,

    /// Check configuration: API key, database, and search connectivity
    Doctor,
}
