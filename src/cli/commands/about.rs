//! The about command: the Explore-tab content for non-interactive use.

use colored::Colorize;
use serde_json::json;

use crate::cli::args::OutputFormat;
use crate::error::TomadoroError;
use crate::output::to_json;
use crate::tui::about_paragraphs;

/// Print the about page.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn about(format: OutputFormat) -> Result<String, TomadoroError> {
    let paragraphs = about_paragraphs();

    match format {
        OutputFormat::Json => to_json(&json!({
            "title": "About Pomodoro",
            "paragraphs": paragraphs,
        })),
        OutputFormat::Pretty => {
            let mut output = Vec::new();
            output.push("About Pomodoro".bold().to_string());
            output.push("─".repeat(40));
            output.push(String::new());

            for paragraph in paragraphs {
                output.push(paragraph);
                output.push(String::new());
            }

            output.push("Start a session with: tomadoro".dimmed().to_string());
            Ok(output.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_pretty_mentions_the_technique() {
        let output = about(OutputFormat::Pretty).unwrap();
        assert!(output.contains("Pomodoro"));
        assert!(output.contains("25"));
    }

    #[test]
    fn test_about_json_is_valid() {
        let output = about(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["title"], "About Pomodoro");
        assert!(value["paragraphs"].as_array().is_some_and(|p| !p.is_empty()));
    }
}
