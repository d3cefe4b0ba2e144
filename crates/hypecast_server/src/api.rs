//! HTTP API for content generation and history.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use hypecast_core::{ContentCategory, GeneratedContent};
use hypecast_error::{HypecastError, HypecastErrorKind};
use hypecast_interface::{CompletionDriver, ContentRepository, SearchProvider};
use hypecast_narrative::{AiGenerator, FanoutGenerator, TemplateGenerator};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::warn;

/// Shared handler state.
///
/// The completion driver and the repository are both optional: without
/// a driver the API falls back to template generation, and without a
/// repository the generation endpoints still work but history endpoints
/// report the store as unavailable.
#[derive(Clone, Default)]
pub struct ApiState {
    ai: Option<Arc<AiGenerator<Arc<dyn CompletionDriver>>>>,
    fanout: Option<Arc<FanoutGenerator<Arc<dyn CompletionDriver>>>>,
    template: TemplateGenerator,
    repository: Option<Arc<dyn ContentRepository>>,
    model: Option<String>,
}

impl ApiState {
    /// Creates empty state: template generation only, no persistence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a completion driver, with optional search enrichment.
    pub fn with_driver(
        mut self,
        driver: Arc<dyn CompletionDriver>,
        search: Option<Arc<dyn SearchProvider>>,
    ) -> Self {
        let mut ai = AiGenerator::new(driver.clone());
        let mut fanout = FanoutGenerator::new(driver);
        if let Some(search) = search {
            ai = ai.with_search(search.clone());
            fanout = fanout.with_search(search);
        }
        self.ai = Some(Arc::new(ai));
        self.fanout = Some(Arc::new(fanout));
        self
    }

    /// Attach the content store.
    pub fn with_repository(mut self, repository: Arc<dyn ContentRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Set a default model override for generation requests.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Persist a record if a repository is configured.
    ///
    /// Save failures are logged and swallowed: the caller still gets the
    /// generated content, just without an id.
    async fn persist(&self, content: GeneratedContent) -> GeneratedContent {
        let Some(repository) = &self.repository else {
            return content;
        };
        match repository.save(&content).await {
            Ok((id, created_at)) => content.with_persisted(id, created_at),
            Err(error) => {
                warn!(%error, topic = %content.topic, "failed to persist generated content");
                content
            }
        }
    }
}

/// Creates the API router.
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/categories", get(categories))
        .route("/api/generate", post(generate))
        .route("/api/history", get(history))
        .route("/api/content/:id", get(get_content).delete(delete_content))
        .route("/api/stats", get(stats))
        .with_state(state)
}

/// Error surface for API handlers.
enum ApiError {
    BadRequest(String),
    Unavailable(String),
    Internal(HypecastError),
}

impl From<HypecastError> for ApiError {
    fn from(err: HypecastError) -> Self {
        Self::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::Unavailable(message) => (StatusCode::SERVICE_UNAVAILABLE, message),
            Self::Internal(error) => {
                let status = match error.kind() {
                    HypecastErrorKind::Database(db)
                        if matches!(
                            db.kind,
                            hypecast_error::DatabaseErrorKind::NotFound(_)
                        ) =>
                    {
                        StatusCode::NOT_FOUND
                    }
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, error.to_string())
            }
        };
        (status, Json(json!({"status": "error", "message": message}))).into_response()
    }
}

async fn root() -> impl IntoResponse {
    Json(json!({
        "service": "Hypecast Content Engine",
        "status": "running",
        "endpoints": {
            "generate": "POST /api/generate",
            "categories": "GET /api/categories",
            "history": "GET /api/history",
            "content": "GET /api/content/{id}",
            "stats": "GET /api/stats",
        }
    }))
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

async fn categories() -> impl IntoResponse {
    let listing: Vec<_> = ContentCategory::iter()
        .map(|category| {
            json!({
                "id": category.as_str(),
                "name": category.display_name(),
                "description": category.description(),
            })
        })
        .collect();
    Json(json!({"categories": listing, "count": ContentCategory::COUNT}))
}

fn default_use_ai() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    topic: String,
    context: Option<String>,
    model: Option<String>,
    #[serde(default)]
    generate_all: bool,
    #[serde(default = "default_use_ai")]
    use_ai: bool,
}

async fn generate(
    State(state): State<ApiState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let topic = req.topic.trim();
    if topic.is_empty() {
        return Err(ApiError::BadRequest("topic is required".to_string()));
    }
    let context = req.context.as_deref().filter(|c| !c.trim().is_empty());
    let model = req.model.as_deref().or(state.model.as_deref());

    // Fan-out is only defined over AI generation.
    if req.generate_all && !req.use_ai {
        return Err(ApiError::BadRequest(
            "generate_all requires use_ai".to_string(),
        ));
    }

    if req.use_ai && req.generate_all {
        let Some(fanout) = &state.fanout else {
            return Err(ApiError::Unavailable(
                "completion service not configured".to_string(),
            ));
        };
        let batch = fanout.generate_all(topic, context, model).await?;
        let mut persisted = Vec::with_capacity(batch.len());
        for content in batch {
            persisted.push(state.persist(content).await);
        }
        return Ok(Json(json!({
            "status": "success",
            "mode": "multi",
            "count": persisted.len(),
            "data": persisted,
        })));
    }

    if req.use_ai {
        if let Some(ai) = &state.ai {
            let content = ai.generate(topic, context, model).await?;
            let content = state.persist(content).await;
            return Ok(Json(json!({
                "status": "success",
                "mode": "single_ai",
                "data": content,
            })));
        }
    }

    let content = state.template.generate(topic, context);
    let content = state.persist(content).await;
    Ok(Json(json!({
        "status": "success",
        "mode": "template",
        "data": content,
    })))
}

fn default_limit() -> i64 {
    10
}

#[derive(Debug, Deserialize)]
struct HistoryParams {
    #[serde(default = "default_limit")]
    limit: i64,
    category: Option<String>,
}

fn repository(state: &ApiState) -> Result<&Arc<dyn ContentRepository>, ApiError> {
    state
        .repository
        .as_ref()
        .ok_or_else(|| ApiError::Unavailable("content store not configured".to_string()))
}

async fn history(
    State(state): State<ApiState>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let repo = repository(&state)?;
    let filter = match params.category.as_deref() {
        Some(raw) => Some(
            raw.parse::<ContentCategory>()
                .map_err(|_| ApiError::BadRequest(format!("unknown category: {raw}")))?,
        ),
        None => None,
    };
    let entries = repo.history(params.limit.clamp(1, 100), filter).await?;
    Ok(Json(json!({"count": entries.len(), "history": entries})))
}

async fn get_content(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<GeneratedContent>, ApiError> {
    let repo = repository(&state)?;
    Ok(Json(repo.get(id).await?))
}

async fn delete_content(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let repo = repository(&state)?;
    repo.delete(id).await?;
    Ok(Json(json!({"status": "success", "deleted": id})))
}

async fn stats(
    State(state): State<ApiState>,
) -> Result<Json<hypecast_interface::ContentStats>, ApiError> {
    let repo = repository(&state)?;
    Ok(Json(repo.stats().await?))
}
