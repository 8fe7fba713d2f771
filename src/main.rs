use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use tomadoro::cli::args::{Cli, Commands, ConfigCommands};
use tomadoro::cli::commands;
use tomadoro::config::{ColorSetting, Config};
use tomadoro::error::TomadoroError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TomadoroError> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let format = cli.output;

    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {}
    }

    let output = match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            tomadoro::tui::run(&config)?;
            String::new()
        }
        Commands::About => commands::about(format)?,
        Commands::Config(args) => match args.command {
            ConfigCommands::Show => commands::config_show(&config, format)?,
            ConfigCommands::Init { force } => commands::config_init(force)?,
        },
        Commands::Completions { shell } => commands::completions(&shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
