//! Command-line interface module.

mod commands;
mod content;
mod doctor;
mod generate;
mod serve;

pub use commands::{Cli, Commands};
pub use content::{run_delete, run_history, run_show};
pub use doctor::run_doctor;
pub use generate::{GenerateArgs, run_generate};
pub use serve::run_server;
