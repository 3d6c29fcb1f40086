use axum::{extract::{Path, Query, State}, http::StatusCode, routing::get, Json, Router};
use keyidx::{top5_search, KeywordIndex, Occurrence};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct SearchParams {
    pub kw1: String,
    #[serde(default)]
    pub kw2: String,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub kw1: String,
    pub kw2: String,
    pub took_s: f64,
    /// `null` when neither keyword is indexed.
    pub results: Option<Vec<String>>,
}

#[derive(Clone)]
pub struct AppState {
    pub index: Arc<KeywordIndex>,
}

/// Router over an index that is already built; handlers only read it.
pub fn build_app(index: KeywordIndex) -> Router {
    let app_state = AppState { index: Arc::new(index) };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/keyword/:keyword", get(keyword_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn search_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    let kw1 = params.kw1.trim().to_lowercase();
    let kw2 = params.kw2.trim().to_lowercase();
    let results = top5_search(&state.index, &kw1, &kw2);
    tracing::debug!(%kw1, %kw2, hits = results.as_ref().map_or(0, Vec::len), "search");
    Json(SearchResponse { kw1, kw2, took_s: start.elapsed().as_secs_f64(), results })
}

pub async fn keyword_handler(State(state): State<AppState>, Path(keyword): Path<String>) -> Result<Json<Vec<Occurrence>>, (StatusCode, String)> {
    let keyword = keyword.to_lowercase();
    match state.index.get(&keyword) {
        Some(occs) => Ok(Json(occs.to_vec())),
        None => Err((StatusCode::NOT_FOUND, format!("{keyword} is not indexed"))),
    }
}
