//! Question Bank — read-only mapping from track to its ordered question list.
//!
//! Built once at startup and shared through `AppState`. Tests construct their
//! own banks instead of relying on the built-in one.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::interview::track::Track;
use crate::models::interview::Question;

#[derive(Debug, Clone)]
pub struct QuestionBank {
    tracks: HashMap<Track, Vec<Question>>,
}

impl QuestionBank {
    /// Every track must have at least one question.
    pub fn new(tracks: HashMap<Track, Vec<Question>>) -> Result<Self> {
        for track in Track::ALL {
            match tracks.get(&track) {
                Some(questions) if !questions.is_empty() => {}
                _ => bail!("question bank has no questions for track '{track}'"),
            }
        }
        Ok(Self { tracks })
    }

    /// The built-in bank: five questions per track.
    pub fn reference() -> Self {
        let frontend = vec![
            Question::new(
                "Explain the virtual DOM and how React reconciles updates.",
                &["virtual dom", "reconciliation", "diffing", "fibers"],
            ),
            Question::new(
                "What are the differences between useEffect and useLayoutEffect?",
                &["timing", "layout", "paint", "cleanup"],
            ),
            Question::new(
                "How would you optimize a large list rendering in React?",
                &["virtualize", "memo", "useMemo", "useCallback", "key"],
            ),
            Question::new(
                "Describe how CSS specificity works and how to avoid conflicts.",
                &["specificity", "cascade", "!important", "BEM"],
            ),
            Question::new(
                "How do you handle state management at scale?",
                &["redux", "zustand", "context", "atom", "query"],
            ),
        ];
        let backend = vec![
            Question::new(
                "Explain ACID properties in databases.",
                &["atomicity", "consistency", "isolation", "durability"],
            ),
            Question::new(
                "How does an index work in MongoDB and when to use it?",
                &["b-tree", "performance", "query", "sort"],
            ),
            Question::new(
                "Describe differences between multiprocessing and multithreading in Python.",
                &["GIL", "cpu-bound", "io-bound"],
            ),
            Question::new(
                "How would you design a rate limiter for an API?",
                &["token bucket", "leaky bucket", "redis", "sliding window"],
            ),
            Question::new(
                "What is idempotency and why is it important for APIs?",
                &["safe", "retry", "PUT", "POST"],
            ),
        ];

        Self {
            tracks: HashMap::from([(Track::Frontend, frontend), (Track::Backend, backend)]),
        }
    }

    /// Loads a bank from JSON shaped as `{"frontend": [{text, keywords}], "backend": [...]}`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read question bank {}", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("Invalid question bank {}", path.display()))
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let by_name: HashMap<String, Vec<Question>> = serde_json::from_str(raw)?;
        let mut tracks = HashMap::new();
        for (name, questions) in by_name {
            let track: Track = name.parse().map_err(anyhow::Error::msg)?;
            tracks.insert(track, questions);
        }
        Self::new(tracks)
    }

    /// Questions for `track`, in bank order.
    pub fn questions(&self, track: Track) -> &[Question] {
        self.tracks.get(&track).map(Vec::as_slice).unwrap_or(&[])
    }
}
