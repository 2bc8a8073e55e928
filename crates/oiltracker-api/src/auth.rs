use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::{info, warn};

use oiltracker_store::Store;
use oiltracker_types::api::{LoginRequest, LoginResponse};

use crate::error::ApiError;

/// Placeholder handed out on every successful login. Carries no session.
pub const MOCK_TOKEN: &str = "mock-token";

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: Store,
}

/// Mock login: plaintext comparison against the seed accounts. Unknown email
/// and wrong password give the same response.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = state
        .store
        .find_user_by_credentials(&req.email, &req.password)
        .ok_or_else(|| {
            warn!(email = %req.email, "failed login");
            ApiError::InvalidCredentials
        })?;

    info!(user_id = user.id, role = ?user.role, "login");

    Ok(Json(LoginResponse {
        user_id: user.id,
        name: user.name.clone(),
        role: user.role,
        token: MOCK_TOKEN,
    }))
}
