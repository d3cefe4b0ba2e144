//! History, show, and delete command handlers.

use hypecast_core::ContentCategory;
use hypecast_database::{PostgresContentRepository, build_pool};
use hypecast_error::{ConfigError, HypecastResult, JsonError};
use hypecast_interface::ContentRepository;

fn repository() -> HypecastResult<PostgresContentRepository> {
    Ok(PostgresContentRepository::new(build_pool()?))
}

/// List recent generations.
pub async fn run_history(limit: i64, category: Option<String>) -> HypecastResult<()> {
    let filter = match category.as_deref() {
        Some(raw) => Some(
            raw.parse::<ContentCategory>()
                .map_err(|_| ConfigError::new(format!("unknown category: {raw}")))?,
        ),
        None => None,
    };

    let entries = repository()?.history(limit, filter).await?;
    if entries.is_empty() {
        println!("No stored content.");
        return Ok(());
    }
    for entry in entries {
        println!(
            "{:>5}  {}  {:<30}  {}",
            entry.id,
            entry.created_at.format("%Y-%m-%d %H:%M"),
            entry.category,
            entry.topic
        );
    }
    Ok(())
}

/// Print a stored record as pretty JSON.
pub async fn run_show(id: i32) -> HypecastResult<()> {
    let content = repository()?.get(id).await?;
    let rendered =
        serde_json::to_string_pretty(&content).map_err(|e| JsonError::new(e.to_string()))?;
    println!("{rendered}");
    Ok(())
}

/// Delete a stored record.
pub async fn run_delete(id: i32) -> HypecastResult<()> {
    repository()?.delete(id).await?;
    println!("Deleted content {id}.");
    Ok(())
}
