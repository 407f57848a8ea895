#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use,
    clippy::cast_possible_truncation
)]

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en");

pub mod app;
pub mod cli;
pub mod config;
pub mod conversation;
pub mod error;
pub mod presentation;
pub mod process;
pub mod records;
pub mod session;
pub mod ui;

pub use config::Config;
pub use conversation::{ChatStep, ConversationEngine};
pub use error::{InsightError, RejectedInput};
pub use process::TaskProgressSimulator;
pub use records::RecordStore;
pub use session::{Session, SessionOptions};
