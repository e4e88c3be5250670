//! Interview Assembly — role → track → bounded prefix of that track's questions.

use tracing::info;

use crate::errors::AppError;
use crate::interview::bank::QuestionBank;
use crate::interview::track::infer_track;
use crate::models::interview::Interview;
use crate::store::{DocumentStore, StoreError, INTERVIEWS};

/// Hard cap on questions per interview, whatever the bank holds.
pub const MAX_QUESTIONS: i64 = 10;

/// Parameters for assembling a new interview.
pub struct AssembleParams<'a> {
    pub role: &'a str,
    pub level: &'a str,
    pub description: Option<&'a str>,
    pub num_questions: i64,
}

/// Builds the interview in memory. Deterministic: always the first N bank
/// questions in bank order, N = clamp(num_questions, 1, 10) limited by bank size.
pub fn build_interview(bank: &QuestionBank, params: &AssembleParams<'_>) -> Interview {
    let track = infer_track(params.role);
    let count = params.num_questions.clamp(1, MAX_QUESTIONS) as usize;

    let questions: Vec<_> = bank.questions(track).iter().take(count).cloned().collect();

    let role = if params.role.is_empty() {
        track.default_role().to_string()
    } else {
        params.role.to_string()
    };

    let description = match params.description {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => format!("Interview for {}", params.role),
    };

    Interview {
        id: None,
        role,
        description,
        level: params.level.to_string(),
        num_questions: questions.len() as u32,
        questions,
    }
}

/// Builds and persists an interview. A failed write fails the request.
pub async fn assemble(
    store: &dyn DocumentStore,
    bank: &QuestionBank,
    params: AssembleParams<'_>,
) -> Result<Interview, AppError> {
    let mut interview = build_interview(bank, &params);

    let document = serde_json::to_value(&interview).map_err(StoreError::from)?;
    let id = store.create_document(INTERVIEWS, document).await?;

    info!(
        "Created interview {id}: role='{}' level='{}' questions={}",
        interview.role, interview.level, interview.num_questions
    );

    interview.id = Some(id);
    Ok(interview)
}
