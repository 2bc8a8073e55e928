use axum::{
    Json,
    extract::{Path, State},
};

use oiltracker_types::api::DataResponse;
use oiltracker_types::models::{Grade, PriceObservation};

use crate::auth::AppState;

type Rows = Json<DataResponse<Vec<PriceObservation>>>;

pub async fn list_grades(State(state): State<AppState>) -> Json<DataResponse<Vec<Grade>>> {
    Json(DataResponse::new(state.store.grades().to_vec()))
}

/// Full generated history, grade-major then date-ascending.
pub async fn list_market(State(state): State<AppState>) -> Rows {
    Json(DataResponse::new(state.store.market().to_vec()))
}

pub async fn latest_market(State(state): State<AppState>) -> Rows {
    Json(DataResponse::new(state.store.latest_market()))
}

/// Unknown grades answer with an empty list.
pub async fn market_by_grade(State(state): State<AppState>, Path(grade_id): Path<u32>) -> Rows {
    Json(DataResponse::new(state.store.market_for_grade(grade_id)))
}
