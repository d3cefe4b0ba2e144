//! Hypecast CLI binary.
//!
//! Command-line access to content generation:
//! - Run the HTTP API server
//! - Generate content for a topic from the terminal
//! - Browse and manage stored generations

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, GenerateArgs};

    // Load .env before reading any configuration.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Serve { config, port } => {
            cli::run_server(config, port).await?;
        }

        Commands::Generate {
            topic,
            context,
            model,
            all,
            template,
            save,
        } => {
            cli::run_generate(GenerateArgs {
                topic,
                context,
                model,
                all,
                template,
                save,
            })
            .await?;
        }

        Commands::History { limit, category } => {
            cli::run_history(limit, category).await?;
        }

        Commands::Show { id } => {
            cli::run_show(id).await?;
        }

        Commands::Delete { id } => {
            cli::run_delete(id).await?;
        }

        Commands::Models => {
            for (name, id) in hypecast_models::MODEL_CATALOG {
                println!("{name:<14} {id}");
            }
        }

        Commands::Doctor => {
            cli::run_doctor().await?;
        }
    }

    Ok(())
}
