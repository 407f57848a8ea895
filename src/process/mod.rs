//! Simulated "AI processing" shown in the database panel: four fixed steps
//! whose status changes on a fixed delay schedule after each record.

pub mod board;
pub mod clock;
pub mod schedule;
pub mod simulator;

pub use board::{ProcessBoard, ProcessStatus, ProcessStep, ProcessStepId};
pub use clock::{Clock, ManualClock, SystemClock};
pub use schedule::{DueUpdate, PROGRESS_SCHEDULE, ProcessUpdate, ProgressTimeline, ScheduledChange};
pub use simulator::TaskProgressSimulator;
