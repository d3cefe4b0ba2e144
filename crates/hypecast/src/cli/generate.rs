//! Generate command handler.

use hypecast_core::{CompletionRequest, GeneratedContent};
use hypecast_database::{PostgresContentRepository, build_pool};
use hypecast_error::{HypecastResult, JsonError};
use hypecast_interface::ContentRepository;
use hypecast_models::{DuckDuckGoClient, OpenRouterClient, model_id_for_name};
use hypecast_narrative::{AiGenerator, FanoutGenerator, TemplateGenerator};
use std::sync::Arc;
use tracing::info;

/// Arguments for the generate command.
pub struct GenerateArgs {
    /// The topic to generate content for
    pub topic: String,
    /// Additional source material
    pub context: Option<String>,
    /// Model name or identifier
    pub model: Option<String>,
    /// Generate one record per category
    pub all: bool,
    /// Use the offline template engine
    pub template: bool,
    /// Persist results to the database
    pub save: bool,
}

/// Generate content and print it as pretty JSON on stdout.
pub async fn run_generate(args: GenerateArgs) -> HypecastResult<()> {
    // Friendly catalog names resolve to provider identifiers; unknown
    // names pass through as raw identifiers.
    let model = args
        .model
        .as_deref()
        .map(|m| model_id_for_name(m).unwrap_or(m).to_string())
        .unwrap_or_else(|| CompletionRequest::DEFAULT_MODEL.to_string());

    let mut records = if args.template {
        vec![TemplateGenerator::new().generate(&args.topic, args.context.as_deref())]
    } else if args.all {
        let generator = FanoutGenerator::new(OpenRouterClient::new(model)?)
            .with_search(Arc::new(DuckDuckGoClient::new()));
        generator
            .generate_all(&args.topic, args.context.as_deref(), None)
            .await?
    } else {
        let generator = AiGenerator::new(OpenRouterClient::new(model)?)
            .with_search(Arc::new(DuckDuckGoClient::new()));
        vec![
            generator
                .generate(&args.topic, args.context.as_deref(), None)
                .await?,
        ]
    };

    if args.save {
        let repository = PostgresContentRepository::new(build_pool()?);
        for record in &mut records {
            let (id, created_at) = repository.save(record).await?;
            record.id = Some(id);
            record.created_at = Some(created_at);
            info!(id, topic = %record.topic, category = %record.category, "saved");
        }
    }

    println!("{}", render(&records)?);
    Ok(())
}

fn render(records: &[GeneratedContent]) -> HypecastResult<String> {
    let rendered = if records.len() == 1 {
        serde_json::to_string_pretty(&records[0])
    } else {
        serde_json::to_string_pretty(records)
    };
    rendered.map_err(|e| JsonError::new(e.to_string()).into())
}
