use std::time::Duration;

use crate::config::Config;
use crate::conversation::engine::DEFAULT_AUTHOR_LABEL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub locale: String,
    pub author_label: String,
    /// Simulated assistant latency before a reply lands.
    pub reply_delay: Duration,
    /// Delay before the introductory message.
    pub greeting_delay: Duration,
    pub seed_sample_records: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            locale: "es".into(),
            author_label: DEFAULT_AUTHOR_LABEL.into(),
            reply_delay: Duration::from_millis(500),
            greeting_delay: Duration::from_millis(500),
            seed_sample_records: false,
        }
    }
}

impl SessionOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            locale: config.effective_locale(),
            author_label: config.author_label.clone(),
            reply_delay: Duration::from_millis(config.reply_delay_ms),
            greeting_delay: Duration::from_millis(config.greeting_delay_ms),
            seed_sample_records: config.seed_sample_records,
        }
    }

}
