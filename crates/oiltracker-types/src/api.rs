use serde::{Deserialize, Serialize};

use crate::models::{ChatMessage, Role};

// -- Index --

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub endpoints: Vec<&'static str>,
}

// -- Auth --

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user_id: u32,
    pub name: String,
    pub role: Role,
    pub token: &'static str,
}

// -- Listings --

/// `{"data": [...]}` envelope shared by every listing endpoint.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// -- Chat --

#[derive(Debug, Default, Deserialize)]
pub struct ChatQuery {
    pub channel_id: Option<u64>,
}

/// Without a `channel_id` the message goes to `general`.
#[derive(Debug, Deserialize)]
pub struct PostChatRequest {
    pub sender: String,
    pub message: String,
    #[serde(default)]
    pub channel_id: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateChannelRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct PostChatResponse {
    pub ok: bool,
    pub data: ChatMessage,
}

// -- Errors --

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: &'static str,
}
