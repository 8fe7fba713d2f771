//! Output helpers for the non-interactive commands.

use serde::Serialize;

use crate::error::TomadoroError;

/// Serialize any value to pretty-printed JSON.
///
/// # Errors
///
/// Returns `TomadoroError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TomadoroError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_to_json_config() {
        let json = to_json(&Config::default()).unwrap();
        assert!(json.contains("\"work_minutes\": 25"));
        assert!(json.contains("\"break_minutes\": 5"));
    }
}
