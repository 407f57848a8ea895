pub mod record;
pub mod samples;
pub mod store;

pub use record::{FeedbackRecord, RecordId};
pub use samples::sample_records;
pub use store::RecordStore;
