//! Answer Evaluation — lookup, answer-count check, scoring, best-effort persistence.

use serde_json::json;
use tracing::info;

use crate::errors::AppError;
use crate::interview::scoring::{score_answers, Scorecard};
use crate::models::evaluation::Evaluation;
use crate::models::interview::Interview;
use crate::store::{persist_best_effort, BestEffort, DocumentStore, EVALUATIONS, INTERVIEWS};

/// Finds an interview by storage id, falling back to a caller-supplied `id` field.
pub async fn find_interview(
    store: &dyn DocumentStore,
    interview_id: &str,
) -> Result<Interview, AppError> {
    let doc = match store.get_document(INTERVIEWS, interview_id).await? {
        Some(doc) => Some(doc),
        None => store
            .get_documents(INTERVIEWS, &json!({ "id": interview_id }), 1)
            .await?
            .into_iter()
            .find(|d| d.matches_id(interview_id)),
    };

    let doc = doc.ok_or_else(|| AppError::NotFound("Interview not found".to_string()))?;

    Interview::from_document(doc).map_err(|e| {
        AppError::Internal(anyhow::anyhow!(
            "Stored interview {interview_id} is malformed: {e}"
        ))
    })
}

/// Scores `answers` against `interview`. Fails before scoring if the counts differ.
pub fn evaluate_interview(
    interview: &Interview,
    interview_id: &str,
    candidate_name: &str,
    answers: Vec<String>,
) -> Result<Evaluation, AppError> {
    if answers.len() != interview.questions.len() {
        return Err(AppError::Validation(format!(
            "Answers length must match number of questions (expected {}, got {})",
            interview.questions.len(),
            answers.len()
        )));
    }

    let Scorecard {
        per_question_scores,
        per_question_feedback,
        total_score,
        verdict,
    } = score_answers(&interview.questions, &answers);

    Ok(Evaluation {
        interview_id: interview_id.to_string(),
        candidate_name: candidate_name.to_string(),
        answers,
        per_question_scores,
        per_question_feedback,
        total_score,
        verdict,
    })
}

/// Full evaluation flow. Storing the result is best-effort: the evaluation is
/// returned even if the write fails.
pub async fn evaluate(
    store: &dyn DocumentStore,
    interview_id: &str,
    candidate_name: &str,
    answers: Vec<String>,
) -> Result<Evaluation, AppError> {
    let interview = find_interview(store, interview_id).await?;
    let evaluation = evaluate_interview(&interview, interview_id, candidate_name, answers)?;

    match serde_json::to_value(&evaluation) {
        Ok(document) => {
            if let BestEffort::Stored(id) =
                persist_best_effort(store, EVALUATIONS, document).await
            {
                info!(
                    "Stored evaluation {id} for interview {interview_id}: {} ({})",
                    evaluation.total_score, evaluation.verdict
                );
            }
        }
        Err(e) => tracing::warn!("Evaluation for interview {interview_id} not stored: {e}"),
    }

    Ok(evaluation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::assembly::{assemble, AssembleParams};
    use crate::interview::bank::QuestionBank;
    use crate::models::evaluation::Verdict;
    use crate::store::{FailingStore, MemoryDocumentStore, StoreError, StoredDocument};
    use async_trait::async_trait;
    use serde_json::Value;

    async fn seeded_store() -> (MemoryDocumentStore, Interview) {
        let store = MemoryDocumentStore::new();
        let interview = assemble(
            &store,
            &QuestionBank::reference(),
            AssembleParams {
                role: "Backend Engineer",
                level: "senior",
                description: None,
                num_questions: 5,
            },
        )
        .await
        .unwrap();
        (store, interview)
    }

    fn answers(n: usize) -> Vec<String> {
        (0..n).map(|_| "atomicity".to_string()).collect()
    }

    #[tokio::test]
    async fn test_find_by_storage_id() {
        let (store, interview) = seeded_store().await;
        let found = find_interview(&store, interview.id.as_deref().unwrap())
            .await
            .unwrap();
        assert_eq!(found, interview);
    }

    #[tokio::test]
    async fn test_find_by_caller_supplied_id_field() {
        let store = MemoryDocumentStore::new();
        store
            .create_document(
                INTERVIEWS,
                json!({
                    "id": "legacy-42",
                    "role": "r",
                    "description": "d",
                    "level": "mid",
                    "num_questions": 1,
                    "questions": [{"text": "q", "keywords": ["k"]}]
                }),
            )
            .await
            .unwrap();
        let found = find_interview(&store, "legacy-42").await.unwrap();
        assert_eq!(found.role, "r");
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let (store, _) = seeded_store().await;
        let err = find_interview(&store, "nope").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_lookup_failure_is_storage_error() {
        let err = find_interview(&FailingStore, "any").await.unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }

    #[tokio::test]
    async fn test_answer_count_mismatch_is_validation_error() {
        let (store, interview) = seeded_store().await;
        let err = evaluate(&store, interview.id.as_deref().unwrap(), "Ada", answers(3))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        // nothing was scored or stored
        assert!(store
            .get_documents(EVALUATIONS, &json!({}), 10)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_evaluate_scores_and_stores() {
        let (store, interview) = seeded_store().await;
        let id = interview.id.clone().unwrap();
        let evaluation = evaluate(&store, &id, "Ada", answers(5)).await.unwrap();

        assert_eq!(evaluation.per_question_scores.len(), 5);
        assert_eq!(evaluation.per_question_feedback.len(), 5);
        assert_eq!(evaluation.per_question_scores[0], 25.0);
        assert_eq!(
            evaluation.per_question_feedback[0],
            "Missing: consistency, isolation, durability"
        );
        assert_eq!(evaluation.total_score, 5.0);
        assert_eq!(evaluation.verdict, Verdict::BelowExpectations);

        let stored = store
            .get_documents(EVALUATIONS, &json!({ "interview_id": id }), 10)
            .await
            .unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].fields["candidate_name"], "Ada");
        assert_eq!(stored[0].fields["verdict"], "Below expectations");
    }

    #[tokio::test]
    async fn test_repeat_submissions_score_identically() {
        let (store, interview) = seeded_store().await;
        let id = interview.id.clone().unwrap();
        let first = evaluate(&store, &id, "Ada", answers(5)).await.unwrap();
        let second = evaluate(&store, &id, "Ada", answers(5)).await.unwrap();
        assert_eq!(first, second);
        let stored = store
            .get_documents(EVALUATIONS, &json!({}), 10)
            .await
            .unwrap();
        assert_eq!(stored.len(), 2);
    }

    /// Reads succeed from an inner store, writes always fail.
    struct ReadOnlyStore(MemoryDocumentStore);

    #[async_trait]
    impl DocumentStore for ReadOnlyStore {
        async fn create_document(&self, _: &str, _: Value) -> Result<String, StoreError> {
            Err(StoreError::Unavailable("read-only".to_string()))
        }

        async fn get_documents(
            &self,
            collection: &str,
            filter: &Value,
            limit: usize,
        ) -> Result<Vec<StoredDocument>, StoreError> {
            self.0.get_documents(collection, filter, limit).await
        }

        async fn get_document(
            &self,
            collection: &str,
            id: &str,
        ) -> Result<Option<StoredDocument>, StoreError> {
            self.0.get_document(collection, id).await
        }

        async fn collections(&self) -> Result<Vec<String>, StoreError> {
            self.0.collections().await
        }

        fn backend_name(&self) -> &'static str {
            "read-only"
        }
    }

    #[tokio::test]
    async fn test_evaluation_write_failure_is_swallowed() {
        let (inner, interview) = seeded_store().await;
        let store = ReadOnlyStore(inner);
        let id = interview.id.clone().unwrap();
        let evaluation = evaluate(&store, &id, "Ada", answers(5)).await.unwrap();
        assert_eq!(evaluation.interview_id, id);
        assert_eq!(evaluation.answers.len(), 5);
    }

    #[test]
    fn test_evaluate_interview_zero_questions() {
        let interview = Interview {
            id: Some("x".to_string()),
            role: "r".to_string(),
            description: "d".to_string(),
            level: "junior".to_string(),
            num_questions: 0,
            questions: vec![],
        };
        let evaluation = evaluate_interview(&interview, "x", "Ada", vec![]).unwrap();
        assert_eq!(evaluation.total_score, 0.0);
        assert_eq!(evaluation.verdict, Verdict::BelowExpectations);
    }
}
