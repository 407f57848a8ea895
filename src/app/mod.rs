//! Application edge: command dispatch, logging and the line-mode chat.

pub mod chat;
pub mod dispatch;
pub mod logging;
pub mod report;

pub use dispatch::dispatch;
