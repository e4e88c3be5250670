use serde::{Deserialize, Serialize};

use crate::store::StoredDocument;

/// A canned question and the terms a good answer is expected to mention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Question {
    pub fn new(text: &str, keywords: &[&str]) -> Self {
        Self {
            text: text.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// An assembled interview. `id` is only known once storage has assigned it,
/// and is never written into the stored document itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interview {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub role: String,
    pub description: String,
    /// junior | mid | senior, not validated
    pub level: String,
    pub num_questions: u32,
    pub questions: Vec<Question>,
}

impl Interview {
    /// Decodes a stored interview, attaching the storage id.
    pub fn from_document(doc: StoredDocument) -> Result<Self, serde_json::Error> {
        let fields = serde_json::Value::Object(doc.fields);
        let mut interview: Interview = serde_json::from_value(fields)?;
        interview.id = Some(doc.id);
        Ok(interview)
    }
}
