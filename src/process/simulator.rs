use std::time::Instant;

use crate::records::RecordId;

use super::board::ProcessBoard;
use super::schedule::{DueUpdate, ProgressTimeline};

/// Runs any number of independent progress timelines against one board.
///
/// Overlapping timelines are not ordered against each other beyond due
/// time: the last update to land for a step wins.
#[derive(Debug, Clone, Default)]
pub struct TaskProgressSimulator {
    timelines: Vec<ProgressTimeline>,
}

impl TaskProgressSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, record_id: RecordId, now: Instant) {
        tracing::info!(record = %record_id, "progress simulation started");
        self.timelines.push(ProgressTimeline::start(record_id, now));
    }

    /// Apply every update due at `now`, oldest due first (ties keep start
    /// order), and forget finished timelines.
    pub fn advance(&mut self, now: Instant, board: &mut ProcessBoard) -> Vec<DueUpdate> {
        let mut due: Vec<DueUpdate> = self
            .timelines
            .iter_mut()
            .flat_map(|timeline| timeline.take_due(now))
            .collect();
        due.sort_by_key(|update| update.due);

        for update in &due {
            board.apply(&update.update);
        }
        self.timelines.retain(|timeline| !timeline.is_finished());
        due
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.timelines.iter().filter_map(ProgressTimeline::next_due).min()
    }

    pub fn active(&self) -> usize {
        self.timelines.len()
    }

    pub fn is_idle(&self) -> bool {
        self.timelines.is_empty()
    }

    /// Whole-session teardown: pending updates never land.
    pub fn cancel_all(&mut self) {
        if !self.timelines.is_empty() {
            tracing::debug!(count = self.timelines.len(), "progress timelines cancelled");
        }
        self.timelines.clear();
    }
}
