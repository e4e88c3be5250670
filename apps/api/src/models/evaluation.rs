use std::fmt;

use serde::{Deserialize, Serialize};

/// Three-tier label derived from the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Strong match")]
    StrongMatch,
    #[serde(rename = "Promising but needs work")]
    PromisingButNeedsWork,
    #[serde(rename = "Below expectations")]
    BelowExpectations,
}

impl Verdict {
    /// Thresholds are checked top-down; the first match wins.
    pub fn from_total_score(total_score: f64) -> Self {
        if total_score >= 75.0 {
            Verdict::StrongMatch
        } else if total_score >= 50.0 {
            Verdict::PromisingButNeedsWork
        } else {
            Verdict::BelowExpectations
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::StrongMatch => "Strong match",
            Verdict::PromisingButNeedsWork => "Promising but needs work",
            Verdict::BelowExpectations => "Below expectations",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scored answers for one interview. The three per-question vectors are
/// index-aligned with the interview's questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub interview_id: String,
    pub candidate_name: String,
    pub answers: Vec<String>,
    pub per_question_scores: Vec<f64>,
    pub per_question_feedback: Vec<String>,
    pub total_score: f64,
    pub verdict: Verdict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_boundaries() {
        assert_eq!(Verdict::from_total_score(75.0), Verdict::StrongMatch);
        assert_eq!(Verdict::from_total_score(74.99), Verdict::PromisingButNeedsWork);
        assert_eq!(Verdict::from_total_score(50.0), Verdict::PromisingButNeedsWork);
        assert_eq!(Verdict::from_total_score(49.99), Verdict::BelowExpectations);
        assert_eq!(Verdict::from_total_score(0.0), Verdict::BelowExpectations);
        assert_eq!(Verdict::from_total_score(100.0), Verdict::StrongMatch);
    }

    #[test]
    fn test_verdict_serializes_as_label() {
        let json = serde_json::to_string(&Verdict::PromisingButNeedsWork).unwrap();
        assert_eq!(json, "\"Promising but needs work\"");
        assert_eq!(Verdict::BelowExpectations.to_string(), "Below expectations");
    }
}
