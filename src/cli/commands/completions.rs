//! Shell completions generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::TomadoroError;

/// Generate a completion script for the named shell.
///
/// # Errors
///
/// Returns an error if the shell name is unknown.
pub fn completions(shell: &str) -> Result<String, TomadoroError> {
    let shell = shell_from_str(shell).ok_or_else(|| {
        TomadoroError::Config(format!(
            "Unknown shell '{shell}'. Supported: bash, zsh, fish, powershell, elvish"
        ))
    })?;

    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "tomadoro", &mut buf);
    String::from_utf8(buf)
        .map_err(|e| TomadoroError::Config(format!("Completion script is not UTF-8: {e}")))
}

/// Get shell from string name.
fn shell_from_str(s: &str) -> Option<Shell> {
    match s.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "powershell" | "ps" | "pwsh" => Some(Shell::PowerShell),
        "elvish" => Some(Shell::Elvish),
        _ => None,
    }
}
