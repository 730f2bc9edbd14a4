//! JSON output formatting

use serde::Serialize;

use crate::error::Result;

/// Format data as pretty-printed JSON
pub fn format_json<T: Serialize>(data: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_json() {
        let data = vec![("id", "1"), ("name", "First")];
        let result = format_json(&data).unwrap();
        assert!(result.contains("First"));
    }
}
