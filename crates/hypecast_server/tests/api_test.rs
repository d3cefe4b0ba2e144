//! Router behavior against in-memory driver and repository fakes.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Utc};
use hypecast_core::{CompletionRequest, ContentCategory, GeneratedContent};
use hypecast_error::{DatabaseError, DatabaseErrorKind, HypecastResult};
use hypecast_interface::{
    CompletionDriver, ContentRepository, ContentStats, HistoryEntry,
};
use hypecast_server::{ApiState, create_router};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

struct EchoDriver;

#[async_trait]
impl CompletionDriver for EchoDriver {
    async fn complete(&self, _req: &CompletionRequest) -> HypecastResult<String> {
        Ok("CATEGORY: new_tool_intro\nMASTER_STORYLINE:\nStory.\nCAPTION:\nCap.".to_string())
    }

    fn provider_name(&self) -> &'static str {
        "echo"
    }

    fn model_name(&self) -> &str {
        "echo/model"
    }
}

#[derive(Default)]
struct MemoryRepository {
    rows: Mutex<Vec<GeneratedContent>>,
    fail_saves: bool,
}

#[async_trait]
impl ContentRepository for MemoryRepository {
    async fn save(&self, content: &GeneratedContent) -> HypecastResult<(i32, DateTime<Utc>)> {
        if self.fail_saves {
            return Err(
                DatabaseError::new(DatabaseErrorKind::Query("store offline".to_string())).into(),
            );
        }
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i32 + 1;
        let created_at = Utc::now();
        rows.push(content.clone().with_persisted(id, created_at));
        Ok((id, created_at))
    }

    async fn get(&self, id: i32) -> HypecastResult<GeneratedContent> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.id == Some(id))
            .cloned()
            .ok_or_else(|| DatabaseError::new(DatabaseErrorKind::NotFound(id)).into())
    }

    async fn history(
        &self,
        limit: i64,
        category: Option<ContentCategory>,
    ) -> HypecastResult<Vec<HistoryEntry>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .rev()
            .filter(|row| category.is_none_or(|wanted| row.category == wanted))
            .take(limit as usize)
            .map(|row| HistoryEntry {
                id: row.id.unwrap(),
                topic: row.topic.clone(),
                category: row.category,
                created_at: row.created_at.unwrap(),
            })
            .collect())
    }

    async fn delete(&self, id: i32) -> HypecastResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.id != Some(id));
        if rows.len() == before {
            return Err(DatabaseError::new(DatabaseErrorKind::NotFound(id)).into());
        }
        Ok(())
    }

    async fn stats(&self) -> HypecastResult<ContentStats> {
        let rows = self.rows.lock().unwrap();
        let mut breakdown = std::collections::BTreeMap::new();
        for row in rows.iter() {
            *breakdown.entry(row.category.as_str().to_string()).or_insert(0) += 1;
        }
        Ok(ContentStats {
            total_content_generated: rows.len() as i64,
            last_7_days: rows.len() as i64,
            category_breakdown: breakdown,
        })
    }
}

fn app_with_repo(repo: Arc<MemoryRepository>) -> axum::Router {
    let state = ApiState::new()
        .with_driver(Arc::new(EchoDriver), None)
        .with_repository(repo);
    create_router(state)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app_with_repo(Arc::new(MemoryRepository::default()));
    let res = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await["status"], "ok");
}

#[tokio::test]
async fn categories_lists_all_six() {
    let app = app_with_repo(Arc::new(MemoryRepository::default()));
    let res = app
        .oneshot(
            Request::builder()
                .uri("/api/categories")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["count"], 6);
    assert_eq!(json["categories"][0]["id"], "new_tool_intro");
    assert!(json["categories"][0]["description"].is_string());
}

#[tokio::test]
async fn generate_rejects_blank_topic() {
    let app = app_with_repo(Arc::new(MemoryRepository::default()));
    let res = app
        .oneshot(post_json("/api/generate", serde_json::json!({"topic": "   "})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(res).await["status"], "error");
}

#[tokio::test]
async fn generate_single_persists_and_returns_id() {
    let repo = Arc::new(MemoryRepository::default());
    let app = app_with_repo(repo.clone());
    let res = app
        .oneshot(post_json(
            "/api/generate",
            serde_json::json!({"topic": "New AI tool"}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["mode"], "single_ai");
    assert_eq!(json["data"]["id"], 1);
    assert_eq!(json["data"]["master_storyline"], "Story.");
    assert_eq!(repo.rows.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn generate_survives_save_failure() {
    let repo = Arc::new(MemoryRepository {
        rows: Mutex::new(Vec::new()),
        fail_saves: true,
    });
    let app = app_with_repo(repo);
    let res = app
        .oneshot(post_json(
            "/api/generate",
            serde_json::json!({"topic": "New AI tool"}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["status"], "success");
    assert!(json["data"]["id"].is_null());
}

#[tokio::test]
async fn generate_all_returns_one_record_per_category() {
    let repo = Arc::new(MemoryRepository::default());
    let app = app_with_repo(repo.clone());
    let res = app
        .oneshot(post_json(
            "/api/generate",
            serde_json::json!({"topic": "New AI tool", "generate_all": true}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["mode"], "multi");
    assert_eq!(json["count"], 6);
    assert_eq!(repo.rows.lock().unwrap().len(), 6);
}

#[tokio::test]
async fn generate_all_without_ai_is_rejected() {
    let repo = Arc::new(MemoryRepository::default());
    let app = app_with_repo(repo.clone());
    let res = app
        .oneshot(post_json(
            "/api/generate",
            serde_json::json!({"topic": "New AI tool", "generate_all": true, "use_ai": false}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let json = body_json(res).await;
    assert_eq!(json["status"], "error");
    assert!(repo.rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn template_mode_without_driver() {
    let state = ApiState::new().with_repository(Arc::new(MemoryRepository::default()));
    let app = create_router(state);
    let res = app
        .oneshot(post_json(
            "/api/generate",
            serde_json::json!({"topic": "Quick productivity tip"}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["mode"], "template");
    assert_eq!(json["data"]["category"], "instagram_engagement_content");
}

#[tokio::test]
async fn history_rejects_unknown_category() {
    let app = app_with_repo(Arc::new(MemoryRepository::default()));
    let res = app
        .oneshot(
            Request::builder()
                .uri("/api/history?category=bogus")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn content_roundtrip_and_delete() {
    let repo = Arc::new(MemoryRepository::default());
    let app = app_with_repo(repo.clone());

    app.clone()
        .oneshot(post_json(
            "/api/generate",
            serde_json::json!({"topic": "New AI tool"}),
        ))
        .await
        .unwrap();

    let res = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/content/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await["topic"], "New AI tool");

    let res = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/content/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app
        .oneshot(
            Request::builder()
                .uri("/api/content/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stats_reflects_saved_rows() {
    let repo = Arc::new(MemoryRepository::default());
    let app = app_with_repo(repo);

    app.clone()
        .oneshot(post_json(
            "/api/generate",
            serde_json::json!({"topic": "New AI tool"}),
        ))
        .await
        .unwrap();

    let res = app
        .oneshot(
            Request::builder()
                .uri("/api/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["total_content_generated"], 1);
    assert_eq!(json["category_breakdown"]["new_tool_intro"], 1);
}
