use super::Config;
use anyhow::{Context, Result};
use directories::UserDirs;
use std::fs;
use std::path::Path;

impl Config {
    /// Load `~/.insight/config.toml`, writing defaults on first run.
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        let insight_dir = home.join(".insight");
        if !insight_dir.exists() {
            fs::create_dir_all(&insight_dir).context("Failed to create .insight directory")?;
        }
        Self::load_from(&insight_dir.join("config.toml"))
    }

    /// Load from an explicit path, writing defaults there if it is missing.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut config = if config_path.exists() {
            let contents = fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let mut config: Config =
                toml::from_str(&contents).context("Failed to parse config file")?;
            config.config_path = config_path.to_path_buf();
            config
        } else {
            let config = Self {
                config_path: config_path.to_path_buf(),
                ..Self::default()
            };
            config.save()?;
            tracing::info!(path = %config_path.display(), "default config written");
            config
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        if let Some(dir) = self.config_path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).context("Failed to create config directory")?;
        }
        let toml_str = self.to_toml()?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
