use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pq_core::{Article, VisualizationPoint};
use pq_state::AppState;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::WebState;

pub enum ApiError {
    ArticleNotFound(String),
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::ArticleNotFound(id) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("No article with id '{}'", id) })),
            )
                .into_response(),
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RefreshRequest {
    pub topic: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FiltersRequest {
    pub topic: Option<String>,
    pub query: Option<String>,
}

fn find_article(state: &WebState, id: &str) -> Result<Article, ApiError> {
    state
        .coordinator
        .snapshot()
        .article(id)
        .cloned()
        .ok_or_else(|| ApiError::ArticleNotFound(id.to_string()))
}

pub async fn get_state(State(state): State<Arc<WebState>>) -> Json<AppState> {
    Json(state.coordinator.snapshot())
}

pub async fn get_bias_map(State(state): State<Arc<WebState>>) -> Json<Vec<VisualizationPoint>> {
    Json(state.coordinator.snapshot().visualization_points)
}

pub async fn refresh_articles(
    State(state): State<Arc<WebState>>,
    body: Result<Json<RefreshRequest>, JsonRejection>,
) -> Result<Json<AppState>, ApiError> {
    // a body is optional, but one that is sent must parse
    let request = match body {
        Ok(Json(request)) => request,
        Err(JsonRejection::MissingJsonContentType(_)) => RefreshRequest::default(),
        Err(rejection) => return Err(ApiError::BadRequest(rejection.body_text())),
    };
    state.coordinator.fetch_articles(request.topic.as_deref()).await;
    Ok(Json(state.coordinator.snapshot()))
}

pub async fn analyze_article(
    State(state): State<Arc<WebState>>,
    Path(id): Path<String>,
) -> Result<Json<AppState>, ApiError> {
    let article = find_article(&state, &id)?;
    state.coordinator.analyze_article(&article).await;
    Ok(Json(state.coordinator.snapshot()))
}

pub async fn select_for_comparison(
    State(state): State<Arc<WebState>>,
    Path(id): Path<String>,
) -> Result<Json<AppState>, ApiError> {
    let article = find_article(&state, &id)?;
    state.coordinator.select_for_comparison(&article);
    Ok(Json(state.coordinator.snapshot()))
}

pub async fn compare_selected(State(state): State<Arc<WebState>>) -> Json<AppState> {
    state.coordinator.compare_selected().await;
    Json(state.coordinator.snapshot())
}

pub async fn clear_comparison(State(state): State<Arc<WebState>>) -> Json<AppState> {
    state.coordinator.clear_comparison();
    Json(state.coordinator.snapshot())
}

pub async fn set_filters(
    State(state): State<Arc<WebState>>,
    Json(filters): Json<FiltersRequest>,
) -> Json<AppState> {
    if let Some(topic) = filters.topic {
        state.coordinator.set_topic_filter(topic);
    }
    if let Some(query) = filters.query {
        state.coordinator.set_search_query(query);
    }
    Json(state.coordinator.snapshot())
}
