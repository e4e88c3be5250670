//! Axum route handlers for the Interview API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::interview::assembly::{assemble, AssembleParams};
use crate::interview::evaluation::evaluate;
use crate::models::evaluation::Evaluation;
use crate::models::interview::Interview;
use crate::state::AppState;
use crate::store::INTERVIEWS;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

fn default_num_questions() -> i64 {
    5
}

fn default_limit() -> usize {
    20
}

#[derive(Debug, Deserialize)]
pub struct CreateInterviewRequest {
    pub role: String,
    pub level: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_num_questions")]
    pub num_questions: i64,
}

#[derive(Debug, Deserialize)]
pub struct ListInterviewsQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub interview_id: String,
    pub candidate_name: String,
    pub answers: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/interviews
pub async fn handle_create_interview(
    State(state): State<AppState>,
    Json(req): Json<CreateInterviewRequest>,
) -> Result<Json<Interview>, AppError> {
    let interview = assemble(
        state.store.as_ref(),
        &state.bank,
        AssembleParams {
            role: &req.role,
            level: &req.level,
            description: req.description.as_deref(),
            num_questions: req.num_questions,
        },
    )
    .await?;
    Ok(Json(interview))
}

/// GET /api/interviews
///
/// Stored documents as-is, with the storage id exposed as `id`.
pub async fn handle_list_interviews(
    State(state): State<AppState>,
    Query(params): Query<ListInterviewsQuery>,
) -> Result<Json<Vec<Value>>, AppError> {
    let docs = state
        .store
        .get_documents(INTERVIEWS, &json!({}), params.limit)
        .await?;
    Ok(Json(docs.into_iter().map(|d| d.into_json()).collect()))
}

/// POST /api/evaluate
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(req): Json<EvaluateRequest>,
) -> Result<Json<Evaluation>, AppError> {
    let evaluation = evaluate(
        state.store.as_ref(),
        &req.interview_id,
        &req.candidate_name,
        req.answers,
    )
    .await?;
    Ok(Json(evaluation))
}
