use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `Insight` - guided feedback-generation chat for the terminal.
#[derive(Parser, Debug)]
#[command(name = "insight")]
#[command(version)]
#[command(about = "A guided feedback-generation chat assistant.", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.insight/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Language of the conversation and the interface
    #[arg(long, global = true, value_parser = ["en", "es"])]
    pub locale: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Full-screen three-panel interface (default)
    Tui,

    /// Line-mode conversation on stdin/stdout
    Chat {
        /// Run these inputs in order without waiting, then print the
        /// transcript, final state and records
        #[arg(long, num_args = 1.., value_name = "INPUT")]
        script: Option<Vec<String>>,

        /// With --script, print a JSON snapshot of the session instead
        #[arg(long, requires = "script")]
        json: bool,
    },

    /// Print the guided tour steps
    Tour,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
}

impl Cli {
    /// The subcommand to run; a bare `insight` opens the TUI.
    pub fn resolved_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Tui)
    }
}
