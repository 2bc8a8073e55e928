use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Senior,
    Junior,
    Viewer,
}

/// Demo account. The password is a plaintext mock credential and is never
/// serialized; this is not a model for real credential storage.
#[derive(Debug, Clone)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    pub id: u32,
    pub name: String,
}

/// One synthetic daily price for a grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub grade_id: u32,
    pub grade_name: String,
    pub date: NaiveDate,
    pub price_usd: f64,
    pub usd_tnd: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Channel {
    pub id: u64,
    pub name: String,
    #[serde(serialize_with = "serialize_utc")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub id: u64,
    pub channel_id: u64,
    pub sender: String,
    pub message: String,
    #[serde(serialize_with = "serialize_utc")]
    pub ts: DateTime<Utc>,
}

/// `2026-01-31T09:15:02.123456Z`
fn serialize_utc<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Micros, true))
}
