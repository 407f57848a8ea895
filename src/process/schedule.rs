use std::time::{Duration, Instant};

use crate::records::RecordId;

use super::board::{ProcessStatus, ProcessStepId};

/// New status and context for one process step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessUpdate {
    pub step: ProcessStepId,
    pub status: ProcessStatus,
    /// Catalog key of the new context line.
    pub context_key: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledChange {
    /// Offset from the moment the record was stored.
    pub delay: Duration,
    pub update: ProcessUpdate,
}

/// What happens to the board after a feedback record is stored.
pub const PROGRESS_SCHEDULE: [ScheduledChange; 4] = [
    ScheduledChange {
        delay: Duration::from_secs(1),
        update: ProcessUpdate {
            step: ProcessStepId(1),
            status: ProcessStatus::Done,
            context_key: "process.collection.done",
        },
    },
    ScheduledChange {
        delay: Duration::from_secs(2),
        update: ProcessUpdate {
            step: ProcessStepId(2),
            status: ProcessStatus::InProgress,
            context_key: "process.analysis.running",
        },
    },
    ScheduledChange {
        delay: Duration::from_secs(4),
        update: ProcessUpdate {
            step: ProcessStepId(3),
            status: ProcessStatus::InProgress,
            context_key: "process.recommendations.running",
        },
    },
    ScheduledChange {
        delay: Duration::from_secs(6),
        update: ProcessUpdate {
            step: ProcessStepId(4),
            status: ProcessStatus::Done,
            context_key: "process.evaluation.done",
        },
    },
];

/// A scheduled update with its absolute due time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueUpdate {
    pub record_id: RecordId,
    pub due: Instant,
    pub update: ProcessUpdate,
}

/// Lazy, finite sequence of updates for one stored record.
///
/// Each call to [`ProgressTimeline::start`] is an independent timeline.
#[derive(Debug, Clone)]
pub struct ProgressTimeline {
    record_id: RecordId,
    started_at: Instant,
    schedule: &'static [ScheduledChange],
    cursor: usize,
}

impl ProgressTimeline {
    pub fn start(record_id: RecordId, started_at: Instant) -> Self {
        Self::with_schedule(record_id, started_at, &PROGRESS_SCHEDULE)
    }

    pub fn with_schedule(
        record_id: RecordId,
        started_at: Instant,
        schedule: &'static [ScheduledChange],
    ) -> Self {
        Self {
            record_id,
            started_at,
            schedule,
            cursor: 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.schedule.len()
    }

    /// Due time of the next pending update.
    pub fn next_due(&self) -> Option<Instant> {
        self.schedule
            .get(self.cursor)
            .map(|change| self.started_at + change.delay)
    }

    /// Drain every pending update due at or before `now`, in schedule order.
    pub fn take_due(&mut self, now: Instant) -> Vec<DueUpdate> {
        let mut due = Vec::new();
        while self.next_due().is_some_and(|at| at <= now) {
            if let Some(update) = self.next() {
                due.push(update);
            }
        }
        due
    }
}

impl Iterator for ProgressTimeline {
    type Item = DueUpdate;

    fn next(&mut self) -> Option<Self::Item> {
        let change = self.schedule.get(self.cursor)?;
        self.cursor += 1;
        Some(DueUpdate {
            record_id: self.record_id,
            due: self.started_at + change.delay,
            update: change.update,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.schedule.len().saturating_sub(self.cursor);
        (left, Some(left))
    }
}

impl ExactSizeIterator for ProgressTimeline {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_is_sorted_and_targets_each_step_once() {
        assert!(PROGRESS_SCHEDULE.windows(2).all(|w| w[0].delay < w[1].delay));
        let steps: Vec<_> = PROGRESS_SCHEDULE.iter().map(|c| c.update.step.0).collect();
        assert_eq!(steps, [1, 2, 3, 4]);
    }

    #[test]
    fn timeline_yields_four_updates_then_ends() {
        let t0 = Instant::now();
        let timeline = ProgressTimeline::start(RecordId::new(), t0);
        assert_eq!(timeline.len(), 4);
        let offsets: Vec<_> = timeline.map(|u| u.due - t0).collect();
        assert_eq!(
            offsets,
            [1, 2, 4, 6].map(Duration::from_secs).to_vec()
        );
    }

    #[test]
    fn take_due_only_drains_elapsed_updates() {
        let t0 = Instant::now();
        let mut timeline = ProgressTimeline::start(RecordId::new(), t0);
        assert!(timeline.take_due(t0 + Duration::from_millis(999)).is_empty());

        let due = timeline.take_due(t0 + Duration::from_secs(2));
        assert_eq!(due.len(), 2);
        assert_eq!(due[1].update.step, ProcessStepId(2));
        assert!(!timeline.is_finished());

        let due = timeline.take_due(t0 + Duration::from_secs(60));
        assert_eq!(due.len(), 2);
        assert!(timeline.is_finished());
        assert!(timeline.next_due().is_none());
    }
}
