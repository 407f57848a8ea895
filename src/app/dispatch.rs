use anyhow::Result;

use crate::cli::{Cli, Commands, ConfigCommands};
use crate::config::Config;
use crate::session::SessionOptions;
use crate::ui::style;

use super::chat;
use super::logging::{self, LogTarget};
use super::report;

/// Load configuration, install logging for the chosen surface and run it.
pub async fn dispatch(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load_or_init()?,
    };
    if let Some(locale) = &cli.locale {
        config.locale = Some(locale.clone());
    }

    let command = cli.resolved_command();
    let target = if command == Commands::Tui {
        LogTarget::File
    } else {
        LogTarget::Stderr
    };
    logging::init(&config, target)?;

    let mut options = SessionOptions::from_config(&config);
    // An explicit flag beats INSIGHT_LANG and the system locale.
    if let Some(locale) = cli.locale {
        options.locale = locale;
    }

    match command {
        Commands::Tui => run_tui(options, config.assistance_on_start),
        Commands::Chat { script: None, .. } => chat::run_interactive(options).await,
        Commands::Chat {
            script: Some(inputs),
            json,
        } => {
            print!("{}", chat::run_script(options, &inputs, json)?);
            Ok(())
        }
        Commands::Tour => {
            print!("{}", report::render_tour(&options.locale));
            Ok(())
        }
        Commands::Config(ConfigCommands::Show) => {
            println!(
                "{}",
                style::dim(format!("# {}", config.config_path.display()))
            );
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

#[cfg(feature = "tui")]
fn run_tui(options: SessionOptions, assistance_on_start: bool) -> Result<()> {
    crate::ui::tui::run_tui(options, assistance_on_start)
}

#[cfg(not(feature = "tui"))]
fn run_tui(_options: SessionOptions, _assistance_on_start: bool) -> Result<()> {
    anyhow::bail!("built without the `tui` feature; use `insight chat` instead")
}
