use std::collections::VecDeque;

use super::record::{FeedbackRecord, RecordId};

/// Append-only, newest-first list of feedback records.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: VecDeque<FeedbackRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the demo sample records.
    pub fn seeded() -> Self {
        Self::from_newest_first(super::samples::sample_records())
    }

    /// Build from records already ordered newest first.
    pub fn from_newest_first(records: impl IntoIterator<Item = FeedbackRecord>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }

    /// O(1) prepend; earlier records are untouched.
    pub fn append(&mut self, record: FeedbackRecord) {
        tracing::info!(
            record = %record.id,
            recipient = %record.recipient_name,
            total = self.records.len() + 1,
            "feedback record stored"
        );
        self.records.push_front(record);
    }

    /// All records, most recent first.
    pub fn list(&self) -> impl ExactSizeIterator<Item = &FeedbackRecord> {
        self.records.iter()
    }

    pub fn latest(&self) -> Option<&FeedbackRecord> {
        self.records.front()
    }

    pub fn get(&self, id: RecordId) -> Option<&FeedbackRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(recipient: &str) -> FeedbackRecord {
        FeedbackRecord::new("InsightBot", recipient, "text", "ctx")
    }

    #[test]
    fn append_prepends() {
        let mut store = RecordStore::new();
        store.append(record("first"));
        store.append(record("second"));
        let names: Vec<_> = store.list().map(|r| r.recipient_name.as_str()).collect();
        assert_eq!(names, ["second", "first"]);
        assert_eq!(store.latest().unwrap().recipient_name, "second");
    }

    #[test]
    fn append_keeps_prior_records() {
        let mut store = RecordStore::seeded();
        let before: Vec<_> = store.list().cloned().collect();
        let new = record("Ana");
        let id = new.id;
        store.append(new);
        let after: Vec<_> = store.list().skip(1).cloned().collect();
        assert_eq!(before, after);
        assert!(store.get(id).is_some());
    }

    #[test]
    fn empty_store() {
        let store = RecordStore::new();
        assert!(store.is_empty());
        assert_eq!(store.list().len(), 0);
        assert!(store.latest().is_none());
    }
}
