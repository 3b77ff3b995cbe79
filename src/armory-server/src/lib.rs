//! Armory HTTP API
//!
//! Weapon search and health endpoints over a loaded [`armory::WeaponIndex`].

use std::sync::Arc;

use armory::{Perk, PerkCategory, Weapon, WeaponIndex, WeaponStats};
use axum::{
    extract::{Query, State},
    http::{header, Method},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{IntoParams, OpenApi, ToSchema};
use utoipa_scalar::{Scalar, Servable};

// =============================================================================
// App State
// =============================================================================

pub struct AppState {
    pub index: Arc<WeaponIndex>,
}

// =============================================================================
// OpenAPI Schema
// =============================================================================

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Armory API",
        description = "Search Destiny 2 weapons and their perks",
        version = "0.1.0",
        license(name = "BSD-2-Clause"),
    ),
    paths(search_weapons, health),
    components(schemas(
        SearchResponse,
        HealthResponse,
        Weapon,
        WeaponStats,
        PerkCategory,
        Perk,
    ))
)]
pub struct ApiDoc;

// =============================================================================
// Types
// =============================================================================

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Case-insensitive substring of the weapon name
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub results: Vec<Weapon>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub manifest_version: String,
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/search",
    params(SearchQuery),
    responses((status = 200, description = "Matching weapons, at most 50", body = SearchResponse)),
    tag = "Weapons"
)]
async fn search_weapons(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let results = state.index.search(&query.q);
    Json(SearchResponse {
        count: results.len(),
        results,
    })
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse)),
    tag = "System"
)]
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        manifest_version: state.index.current_version(),
    })
}

// =============================================================================
// Router
// =============================================================================

/// Build the API router with CORS and request tracing
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/api/search", get(search_weapons))
        .route("/api/health", get(health))
        .route("/api/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .merge(Scalar::with_url("/api/scalar", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
