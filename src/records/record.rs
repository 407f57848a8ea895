use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One submitted feedback. Created once per completed cycle, never changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub id: RecordId,
    /// Who produced the record, e.g. `InsightBot`.
    pub author_label: String,
    pub recipient_name: String,
    pub feedback_text: String,
    pub context: String,
    pub date: NaiveDate,
}

impl FeedbackRecord {
    pub fn new(author_label: &str, recipient_name: &str, feedback_text: &str, context: &str) -> Self {
        Self {
            id: RecordId::new(),
            author_label: author_label.to_string(),
            recipient_name: recipient_name.to_string(),
            feedback_text: feedback_text.to_string(),
            context: context.to_string(),
            date: Local::now().date_naive(),
        }
    }

    pub fn dated(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// `YYYY-MM-DD`, the form shown on record cards.
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
