//! Doctor command handler.

use hypecast_database::establish_connection;
use hypecast_error::HypecastResult;
use hypecast_interface::SearchProvider;
use hypecast_models::DuckDuckGoClient;

/// Check external configuration and report each dependency.
///
/// Always exits successfully; the report tells the user what is and is
/// not available.
pub async fn run_doctor() -> HypecastResult<()> {
    match std::env::var("OPENROUTER_API_KEY") {
        Ok(key) if !key.trim().is_empty() => {
            println!("[ok]   OPENROUTER_API_KEY is set");
        }
        _ => {
            println!("[miss] OPENROUTER_API_KEY not set (template generation only)");
        }
    }

    if std::env::var("DATABASE_URL").is_ok() {
        let connected = tokio::task::spawn_blocking(|| establish_connection().is_ok())
            .await
            .unwrap_or(false);
        if connected {
            println!("[ok]   database reachable");
        } else {
            println!("[fail] DATABASE_URL is set but the database is unreachable");
        }
    } else {
        println!("[miss] DATABASE_URL not set (history disabled)");
    }

    match DuckDuckGoClient::new().search("artificial intelligence").await {
        Some(_) => println!("[ok]   search enrichment reachable"),
        None => println!("[miss] search enrichment unavailable (prompts proceed without it)"),
    }

    Ok(())
}
