//! JSON serving surface over the content client.
//!
//! The site's page markup lives elsewhere; this service exposes the article
//! data the pages render plus a health probe:
//!
//! - `GET /api/news?locale=&category=&limit=`
//! - `GET /api/news/{slug}?locale=`
//! - `GET /health`

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::cms::{Article, CmsClient, DEFAULT_LIST_LIMIT};
use crate::db::Database;
use crate::i18n::Language;
use crate::prefs::UserPreferences;

#[derive(Clone)]
pub struct AppState {
    pub cms: Arc<CmsClient>,
    pub db: Database,
    /// Startup preferences; requests without an explicit locale use this
    /// language.
    pub preferences: UserPreferences,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/news", get(list_news))
        .route("/api/news/:slug", get(news_by_slug))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    locale: Option<String>,
    category: Option<String>,
    limit: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct SlugQuery {
    locale: Option<String>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    database: &'static str,
}

/// Resolve an optional locale query parameter against the injected default.
/// An unknown code is a caller error, not a fallback situation.
fn resolve_language(param: Option<&str>, default: Language) -> Result<Language, StatusCode> {
    match param {
        Some(code) => Language::from_code(code).map_err(|_| StatusCode::BAD_REQUEST),
        None => Ok(default),
    }
}

async fn list_news(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Article>>, StatusCode> {
    let language = resolve_language(query.locale.as_deref(), state.preferences.language)?;
    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT);

    let articles = state
        .cms
        .list_articles(language, query.category.as_deref(), limit)
        .await;

    Ok(Json(articles))
}

async fn news_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<SlugQuery>,
) -> Result<Json<Article>, StatusCode> {
    let language = resolve_language(query.locale.as_deref(), state.preferences.language)?;

    match state.cms.article_by_slug(&slug, language).await {
        Some(article) => Ok(Json(article)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, StatusCode> {
    match state.db.ping().await {
        Ok(()) => Ok(Json(HealthResponse {
            status: "ok",
            database: state.db.client_name(),
        })),
        Err(err) => {
            warn!("health check failed: {err:#}");
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
