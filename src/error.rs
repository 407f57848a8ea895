use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for Insight.
///
/// The conversation core never fails: its only signalled condition is a
/// rejected submission, which callers treat as a no-op. Configuration and
/// terminal problems surface at the application edge.
#[derive(Debug, Error)]
pub enum InsightError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Chat input ───────────────────────────────────────────────────────
    #[error("input rejected: {0}")]
    Rejected(#[from] RejectedInput),

    // ── Terminal UI ──────────────────────────────────────────────────────
    #[error("ui: {0}")]
    Ui(String),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Rejected submissions ───────────────────────────────────────────────────

/// A submission the conversation ignored. Never a fault: nothing was
/// mutated and nothing was appended to the message log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectedInput {
    #[error("empty or whitespace-only text")]
    Blank,

    #[error("conversation already completed")]
    Closed,

    #[error("a reply is still pending")]
    Busy,
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, InsightError>;
