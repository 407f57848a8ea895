use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{AsRefStr, Display, EnumIter};

use super::schedule::ProcessUpdate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessStepId(pub u8);

impl fmt::Display for ProcessStepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, AsRefStr, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProcessStatus {
    #[default]
    Paused,
    InProgress,
    Done,
    DoneNegative,
}

impl ProcessStatus {
    pub fn label(self, locale: &str) -> String {
        let key = format!("process.status.{self}");
        t!(&key, locale = locale).into_owned()
    }
}

/// Catalog prefix of each fixed step, in id order (1..=4).
const STEP_KEYS: [&str; 4] = ["collection", "analysis", "recommendations", "evaluation"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub id: ProcessStepId,
    pub name: String,
    pub context: String,
    pub status: ProcessStatus,
}

/// The four process steps of a session. Only `context` and `status` change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessBoard {
    locale: String,
    steps: Vec<ProcessStep>,
}

impl ProcessBoard {
    pub fn new(locale: &str) -> Self {
        let steps = (1u8..)
            .zip(STEP_KEYS)
            .map(|(id, key)| {
                let name_key = format!("process.{key}.name");
                let context_key = format!("process.{key}.initial");
                ProcessStep {
                    id: ProcessStepId(id),
                    name: t!(&name_key, locale = locale).into_owned(),
                    context: t!(&context_key, locale = locale).into_owned(),
                    status: ProcessStatus::Paused,
                }
            })
            .collect();
        Self {
            locale: locale.to_string(),
            steps,
        }
    }

    pub fn steps(&self) -> &[ProcessStep] {
        &self.steps
    }

    pub fn step(&self, id: ProcessStepId) -> Option<&ProcessStep> {
        self.steps.iter().find(|s| s.id == id)
    }

    pub fn status(&self, id: ProcessStepId) -> Option<ProcessStatus> {
        self.step(id).map(|s| s.status)
    }

    /// Overwrite one step's status and context. Last write wins.
    pub fn apply(&mut self, update: &ProcessUpdate) -> bool {
        let Some(step) = self.steps.iter_mut().find(|s| s.id == update.step) else {
            tracing::warn!(step = %update.step, "update for unknown process step dropped");
            return false;
        };
        step.status = update.status;
        step.context = t!(update.context_key, locale = self.locale.as_str()).into_owned();
        tracing::debug!(step = %update.step, status = %update.status, "process step updated");
        true
    }
}
