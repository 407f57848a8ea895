//! One user session: the conversation, the record list, the process board
//! and the simulated latencies that tie them together.

mod options;

pub use options::SessionOptions;

use serde::Serialize;
use std::time::Instant;

use crate::conversation::{
    ChatMessage, ConversationEngine, ConversationState, ReferenceProjection, Turn,
};
use crate::error::RejectedInput;
use crate::process::{
    Clock, DueUpdate, ProcessBoard, ProcessStep, SystemClock, TaskProgressSimulator,
};
use crate::records::{FeedbackRecord, RecordId, RecordStore};

/// Something observable that happened during [`Session::tick`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Greeted(ChatMessage),
    Replied(Box<Turn>),
    RecordStored(RecordId),
    ProcessUpdated(DueUpdate),
}

/// Everything the rendering side sees, borrowed for serialization.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot<'a> {
    pub state: &'a ConversationState,
    pub messages: &'a [ChatMessage],
    pub projection: &'a ReferenceProjection,
    /// Newest first.
    pub records: Vec<&'a FeedbackRecord>,
    pub processes: &'a [ProcessStep],
}

#[derive(Debug, Clone)]
struct PendingSubmission {
    text: String,
    due: Instant,
}

/// Single logical actor: every mutation goes through `&mut self`, driven by
/// user input and by [`Session::tick`].
#[derive(Debug)]
pub struct Session<C: Clock = SystemClock> {
    options: SessionOptions,
    clock: C,
    engine: ConversationEngine,
    records: RecordStore,
    board: ProcessBoard,
    simulator: TaskProgressSimulator,
    opened_at: Instant,
    pending: Option<PendingSubmission>,
}

impl Session<SystemClock> {
    pub fn with_system_clock(options: SessionOptions) -> Self {
        Self::new(options, SystemClock)
    }
}

impl<C: Clock> Session<C> {
    pub fn new(options: SessionOptions, clock: C) -> Self {
        let opened_at = clock.now();
        Self {
            engine: ConversationEngine::with_author(&options.locale, &options.author_label),
            board: ProcessBoard::new(&options.locale),
            records: initial_records(&options),
            simulator: TaskProgressSimulator::new(),
            opened_at,
            pending: None,
            clock,
            options,
        }
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn engine(&self) -> &ConversationEngine {
        &self.engine
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    pub fn board(&self) -> &ProcessBoard {
        &self.board
    }

    pub fn simulator(&self) -> &TaskProgressSimulator {
        &self.simulator
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            state: self.engine.state(),
            messages: self.engine.messages(),
            projection: self.engine.projection(),
            records: self.records.list().collect(),
            processes: self.board.steps(),
        }
    }

    /// Text submitted but not yet answered.
    pub fn pending_text(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.text.as_str())
    }

    pub fn is_replying(&self) -> bool {
        self.pending.is_some()
    }

    /// Emit the greeting now instead of waiting for the greeting delay.
    pub fn open(&mut self) -> Option<ChatMessage> {
        self.engine.open()
    }

    /// Queue `text` for the assistant; it is answered by a later
    /// [`tick`](Self::tick) once the reply delay has passed.
    pub fn send(&mut self, text: &str) -> Result<(), RejectedInput> {
        if text.trim().is_empty() {
            return Err(RejectedInput::Blank);
        }
        if !self.engine.accepts_input() {
            return Err(RejectedInput::Closed);
        }
        if self.pending.is_some() {
            tracing::debug!("submission while a reply is pending ignored");
            return Err(RejectedInput::Busy);
        }
        self.pending = Some(PendingSubmission {
            text: text.to_string(),
            due: self.clock.now() + self.options.reply_delay,
        });
        Ok(())
    }

    /// Deliver `text` immediately, skipping the simulated latency.
    pub fn submit_now(&mut self, text: &str) -> Result<Turn, RejectedInput> {
        if self.pending.is_some() {
            return Err(RejectedInput::Busy);
        }
        self.deliver(text)
    }

    /// Run everything that is due: the greeting, a pending reply and
    /// process updates.
    pub fn tick(&mut self) -> Vec<SessionEvent> {
        let now = self.clock.now();
        let mut events = Vec::new();

        if now >= self.opened_at + self.options.greeting_delay
            && let Some(greeting) = self.engine.open()
        {
            events.push(SessionEvent::Greeted(greeting));
        }

        if self.pending.as_ref().is_some_and(|p| p.due <= now)
            && let Some(pending) = self.pending.take()
        {
            match self.deliver(&pending.text) {
                Ok(turn) => {
                    if let Some(record) = &turn.record {
                        events.push(SessionEvent::RecordStored(record.id));
                    }
                    events.push(SessionEvent::Replied(Box::new(turn)));
                }
                Err(rejected) => {
                    tracing::debug!(%rejected, "pending submission dropped");
                }
            }
        }

        events.extend(
            self.simulator
                .advance(now, &mut self.board)
                .into_iter()
                .map(SessionEvent::ProcessUpdated),
        );
        events
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do.
    pub fn next_wakeup(&self) -> Option<Instant> {
        let greeting = (self.engine.step() == crate::conversation::ChatStep::Greeting)
            .then(|| self.opened_at + self.options.greeting_delay);
        [
            greeting,
            self.pending.as_ref().map(|p| p.due),
            self.simulator.next_due(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// "Create a new chat": start over as if the session had just been
    /// created. Timelines stop, the board goes back to paused and the record
    /// list returns to its initial contents.
    pub fn new_chat(&mut self) {
        tracing::info!(discarded = self.records.len(), "new chat started");
        self.simulator.cancel_all();
        self.engine.reset();
        self.board = ProcessBoard::new(&self.options.locale);
        self.records = initial_records(&self.options);
        self.pending = None;
        self.opened_at = self.clock.now();
    }

    /// Session teardown: drop pending work so nothing else lands.
    pub fn close(&mut self) {
        self.pending = None;
        self.simulator.cancel_all();
    }

    fn deliver(&mut self, text: &str) -> Result<Turn, RejectedInput> {
        let turn = self.engine.submit(text)?;
        if let Some(record) = &turn.record {
            self.records.append(record.clone());
            self.simulator.start(record.id, self.clock.now());
        }
        Ok(turn)
    }
}

fn initial_records(options: &SessionOptions) -> RecordStore {
    if options.seed_sample_records {
        RecordStore::seeded()
    } else {
        RecordStore::new()
    }
}
