use axum::{
    Json,
    extract::{Path, State},
};

use oiltracker_types::analytics::{GradeInterpretation, GradeScore};
use oiltracker_types::api::DataResponse;

use crate::auth::AppState;
use crate::error::ApiError;

const NO_DATA: &str = "No data for grade";

pub async fn buying_scores(State(state): State<AppState>) -> Json<DataResponse<Vec<GradeScore>>> {
    Json(DataResponse::new(state.store.buying_scores()))
}

pub async fn buying_score(
    State(state): State<AppState>,
    Path(grade_id): Path<u32>,
) -> Result<Json<DataResponse<GradeScore>>, ApiError> {
    let score = state.store.buying_score(grade_id).ok_or(ApiError::NotFound(NO_DATA))?;
    Ok(Json(DataResponse::new(score)))
}

pub async fn interpret(
    State(state): State<AppState>,
    Path(grade_id): Path<u32>,
) -> Result<Json<DataResponse<GradeInterpretation>>, ApiError> {
    let interp = state.store.interpretation(grade_id).ok_or(ApiError::NotFound(NO_DATA))?;
    Ok(Json(DataResponse::new(interp)))
}
