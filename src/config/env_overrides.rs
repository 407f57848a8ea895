use super::Config;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(locale) = std::env::var("INSIGHT_LOCALE")
            && !locale.trim().is_empty()
        {
            self.locale = Some(locale.trim().to_string());
        }

        if let Ok(author) = std::env::var("INSIGHT_AUTHOR")
            && !author.trim().is_empty()
        {
            self.author_label = author;
        }

        if let Ok(delay_str) = std::env::var("INSIGHT_REPLY_DELAY_MS")
            && let Ok(delay) = delay_str.trim().parse::<u64>()
        {
            self.reply_delay_ms = delay;
        }

        if let Ok(level) = std::env::var("INSIGHT_LOG_LEVEL")
            && !level.trim().is_empty()
        {
            self.log_level = level.trim().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_env::ScopedEnv;

    #[test]
    fn env_overrides_replace_config_values() {
        let mut env = ScopedEnv::lock();
        env.set("INSIGHT_LOCALE", " en ")
            .set("INSIGHT_AUTHOR", "People Ops")
            .set("INSIGHT_REPLY_DELAY_MS", "0")
            .set("INSIGHT_LOG_LEVEL", "debug");

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.locale.as_deref(), Some("en"));
        assert_eq!(config.author_label, "People Ops");
        assert_eq!(config.reply_delay_ms, 0);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn unparsable_or_blank_values_are_ignored() {
        let mut env = ScopedEnv::lock();
        env.set("INSIGHT_LOCALE", "  ")
            .unset("INSIGHT_AUTHOR")
            .set("INSIGHT_REPLY_DELAY_MS", "soon")
            .unset("INSIGHT_LOG_LEVEL");

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config, Config::default());
    }
}
