use axum::{
    Json,
    extract::{Query, State},
};

use oiltracker_types::api::{
    ChatQuery, CreateChannelRequest, DataResponse, PostChatRequest, PostChatResponse,
};
use oiltracker_types::models::{Channel, ChatMessage};

use crate::auth::AppState;
use crate::error::ApiError;

/// Latest messages, all channels unless `?channel_id=` is given. An unknown
/// channel lists as empty.
pub async fn list_messages(
    State(state): State<AppState>,
    Query(query): Query<ChatQuery>,
) -> Result<Json<DataResponse<Vec<ChatMessage>>>, ApiError> {
    let messages = state.store.recent_chat(query.channel_id)?;
    Ok(Json(DataResponse::new(messages)))
}

/// Anyone may post under any sender name. Oversized fields are truncated,
/// never rejected.
pub async fn post_message(
    State(state): State<AppState>,
    Json(req): Json<PostChatRequest>,
) -> Result<Json<PostChatResponse>, ApiError> {
    let row = state
        .store
        .post_chat(req.channel_id, &req.sender, &req.message)?
        .ok_or(ApiError::NotFound("Unknown channel"))?;
    Ok(Json(PostChatResponse { ok: true, data: row }))
}

pub async fn list_channels(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<Channel>>>, ApiError> {
    Ok(Json(DataResponse::new(state.store.channels()?)))
}

pub async fn create_channel(
    State(state): State<AppState>,
    Json(req): Json<CreateChannelRequest>,
) -> Result<Json<DataResponse<Channel>>, ApiError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(ApiError::BadRequest("Invalid channel payload"));
    }
    Ok(Json(DataResponse::new(state.store.create_channel(name)?)))
}
