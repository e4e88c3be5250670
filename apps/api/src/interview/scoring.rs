//! Answer scoring — keyword coverage by case-insensitive substring containment.
//!
//! Matching is deliberately not word-bounded: "io-bound" counts inside a
//! longer token. Changing that alters every stored score's meaning.

use crate::models::evaluation::Verdict;
use crate::models::interview::Question;

/// Score assigned to keyword-less questions with a long enough answer.
pub const OPEN_ANSWER_SCORE: f64 = 50.0;
/// Score assigned to keyword-less questions with a short answer.
pub const SHORT_ANSWER_SCORE: f64 = 20.0;
/// Answers must have more than this many words to earn `OPEN_ANSWER_SCORE`.
pub const SHORT_ANSWER_WORDS: usize = 5;
/// Scores strictly above this get "Good coverage."
pub const GOOD_COVERAGE_THRESHOLD: f64 = 70.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AnswerScore {
    pub score: f64,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scorecard {
    pub per_question_scores: Vec<f64>,
    pub per_question_feedback: Vec<String>,
    pub total_score: f64,
    pub verdict: Verdict,
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scores one answer against one question.
pub fn score_answer(question: &Question, answer: &str) -> AnswerScore {
    let answer = answer.to_lowercase();

    let missing: Vec<&str> = question
        .keywords
        .iter()
        .filter(|k| !answer.contains(&k.to_lowercase()))
        .map(String::as_str)
        .collect();

    let score = if question.keywords.is_empty() {
        if answer.split_whitespace().count() > SHORT_ANSWER_WORDS {
            OPEN_ANSWER_SCORE
        } else {
            SHORT_ANSWER_SCORE
        }
    } else {
        let covered = question.keywords.len() - missing.len();
        round2(100.0 * covered as f64 / question.keywords.len() as f64)
    };

    let feedback = if score > GOOD_COVERAGE_THRESHOLD {
        "Good coverage.".to_string()
    } else if !missing.is_empty() {
        format!("Missing: {}", missing.join(", "))
    } else {
        "Could be more specific.".to_string()
    };

    AnswerScore { score, feedback }
}

/// Scores index-aligned answers. Callers must have checked the lengths match.
pub fn score_answers(questions: &[Question], answers: &[String]) -> Scorecard {
    let (per_question_scores, per_question_feedback): (Vec<f64>, Vec<String>) = questions
        .iter()
        .zip(answers)
        .map(|(q, a)| {
            let AnswerScore { score, feedback } = score_answer(q, a);
            (score, feedback)
        })
        .unzip();

    let total_score = if per_question_scores.is_empty() {
        0.0
    } else {
        round2(per_question_scores.iter().sum::<f64>() / per_question_scores.len() as f64)
    };

    Scorecard {
        per_question_scores,
        per_question_feedback,
        total_score,
        verdict: Verdict::from_total_score(total_score),
    }
}
