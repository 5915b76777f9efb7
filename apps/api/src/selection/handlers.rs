use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::models::record::RecordRow;
use crate::selection::orchestrator::{submit, Submission};
use crate::selection::store::{get_record, list_records};
use crate::selection::transcript::Transcript;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SubmitRequest {
    pub profile: Profile,
    /// The caller's session transcript so far. Omitted on the first submission.
    #[serde(default)]
    pub transcript: Transcript,
}

#[derive(Serialize)]
pub struct SubmitResponse {
    pub submission: Submission,
    pub transcript: Transcript,
}

/// POST /api/v1/submissions
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(req): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, AppError> {
    let SubmitRequest {
        profile,
        mut transcript,
    } = req;
    let submission = submit(&state.db, state.completion.as_ref(), profile, &mut transcript).await?;
    Ok(Json(SubmitResponse {
        submission,
        transcript,
    }))
}

/// GET /api/v1/records
pub async fn handle_list_records(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecordRow>>, AppError> {
    Ok(Json(list_records(&state.db).await?))
}

/// GET /api/v1/records/:id
pub async fn handle_get_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RecordRow>, AppError> {
    get_record(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Record {id} not found")))
}
