use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "tomadoro")]
#[command(about = "A two-screen Pomodoro timer for the terminal")]
#[command(long_about = "tomadoro - A Pomodoro timer for the terminal

Runs a work/break countdown in a full-screen terminal UI with two tabs:
the timer itself and an about page explaining the technique.

QUICK START:
  tomadoro                  Launch the timer (space starts, r resets)
  tomadoro about            Read about the Pomodoro technique
  tomadoro config init      Write a default config file to edit

Work and break lengths come from ~/.tomadoro/config.yaml (25 and 5
minutes by default).

For more information on a specific command, run:
  tomadoro <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive timer (the default when no command is given)
    ///
    /// Opens the full-screen terminal UI. Keys:
    ///
    ///   space      Start or pause the countdown
    ///   r          Reset to a fresh work session
    ///   Tab, 1, 2  Switch between the Timer and Explore tabs
    ///   ?          Show key help in the status bar
    ///   q, Esc     Quit
    Tui,

    /// About the Pomodoro technique
    ///
    /// Prints the Explore-tab content without entering the terminal UI.
    ///
    /// # Examples
    ///
    ///   tomadoro about
    ///   tomadoro about -o json
    #[command(alias = "explore")]
    About,

    /// View or initialize configuration
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// Supported shells: bash, zsh, fish, powershell, elvish.
    ///
    /// # Examples
    ///
    ///   source <(tomadoro completions bash)
    Completions {
        /// Shell to generate completions for
        shell: String,
    },
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    ///
    /// Prints the merged configuration: values from
    /// ~/.tomadoro/config.yaml where present, defaults everywhere else.
    Show,

    /// Write a default config file to ~/.tomadoro/config.yaml
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
