//! Configuration commands.

use chrono::Duration;
use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::config::{Config, Paths};
use crate::error::TomadoroError;
use crate::output::to_json;
use crate::timer::format_duration;

/// Show the effective configuration.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn config_show(config: &Config, format: OutputFormat) -> Result<String, TomadoroError> {
    match format {
        OutputFormat::Json => to_json(config),
        OutputFormat::Pretty => {
            let work = Duration::minutes(i64::from(config.timer.work_minutes));
            let brk = Duration::minutes(i64::from(config.timer.break_minutes));

            let mut output = Vec::new();
            output.push("Configuration".bold().to_string());
            output.push("─".repeat(40));
            output.push(format!("Work session:   {}", format_duration(work)));
            output.push(format!("Break session:  {}", format_duration(brk)));
            output.push(format!(
                "Notifications:  {}",
                if config.timer.notifications { "on" } else { "off" }
            ));

            if let Ok(paths) = Paths::new() {
                output.push(String::new());
                let hint = if paths.config_file.exists() {
                    format!("Loaded from {}", paths.config_file.display())
                } else {
                    format!(
                        "Using defaults; run 'tomadoro config init' to create {}",
                        paths.config_file.display()
                    )
                };
                output.push(hint.dimmed().to_string());
            }

            Ok(output.join("\n"))
        }
    }
}

/// Write a default config file.
///
/// # Errors
///
/// Returns an error if the file already exists (without `--force`) or cannot
/// be written.
pub fn config_init(force: bool) -> Result<String, TomadoroError> {
    let paths = Paths::new()?;

    if paths.config_file.exists() && !force {
        return Err(TomadoroError::Config(format!(
            "{} already exists. Use --force to overwrite.",
            paths.config_file.display()
        )));
    }

    Config::default().save()?;

    Ok(format!("Wrote {}", paths.config_file.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_show_pretty() {
        let output = config_show(&Config::default(), OutputFormat::Pretty).unwrap();
        assert!(output.contains("25 minutes"));
        assert!(output.contains("5 minutes"));
    }

    #[test]
    fn test_config_show_json_round_trips() {
        let output = config_show(&Config::default(), OutputFormat::Json).unwrap();
        let parsed: Config = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.timer.work_minutes, 25);
    }
}
