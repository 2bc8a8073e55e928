pub mod analytics;
pub mod auth;
pub mod chat;
pub mod error;
pub mod market;

use axum::{
    Json, Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use oiltracker_types::api::IndexResponse;

use crate::auth::AppState;

/// All JSON routes over shared state. Static assets are mounted by the server.
///
/// CORS mirrors any origin and allows credentials. Fine for a demo, not for a
/// real trust boundary.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/auth/login", post(auth::login))
        .route("/grades", get(market::list_grades))
        .route("/market", get(market::list_market))
        .route("/market/latest", get(market::latest_market))
        .route("/market/by-grade/{grade_id}", get(market::market_by_grade))
        .route("/analytics/buying-score", get(analytics::buying_scores))
        .route("/analytics/buying-score/{grade_id}", get(analytics::buying_score))
        .route("/analytics/interpret/{grade_id}", get(analytics::interpret))
        .route("/chat", get(chat::list_messages).post(chat::post_message))
        .route("/chat/channels", get(chat::list_channels).post(chat::create_channel))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "OilTracker running. Open /static/ for the interface.",
        endpoints: vec![
            "/auth/login",
            "/grades",
            "/market",
            "/market/latest",
            "/market/by-grade/{grade_id}",
            "/analytics/buying-score",
            "/analytics/buying-score/{grade_id}",
            "/analytics/interpret/{grade_id}",
            "/chat",
            "/chat/channels",
        ],
    })
}
