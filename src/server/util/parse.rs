use serde::de::DeserializeOwned;

use crate::server::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalError(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Deserializes a JSON document stored in a text column.
///
/// # Arguments
/// - `table` / `column` - Location of the value, reported when it is corrupt
/// - `value` - Raw stored JSON
///
/// # Returns
/// - `Ok(T)` - Deserialized value
/// - `Err(AppError::InternalErr(CorruptJson))` - Stored text is not valid for `T`
pub fn parse_json_column<T: DeserializeOwned>(
    table: &'static str,
    column: &'static str,
    value: &str,
) -> Result<T, AppError> {
    let parsed = serde_json::from_str(value).map_err(|source| InternalError::CorruptJson {
        table,
        column,
        source,
    })?;

    Ok(parsed)
}

/// Truncates a Discord id for compact display, e.g. `12345678...`.
pub fn shorten_id(id: &str) -> String {
    if id.chars().count() <= 8 {
        return id.to_string();
    }

    let head: String = id.chars().take(8).collect();
    format!("{}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_id() {
        assert_eq!(parse_u64_from_string("123".to_string()).unwrap(), 123);
    }

    #[test]
    fn rejects_non_numeric_id() {
        assert!(parse_u64_from_string("abc".to_string()).is_err());
    }

    #[test]
    fn parses_json_list() {
        let roles: Vec<String> = parse_json_column("ticket_panel", "support_roles", r#"["1","2"]"#)
            .unwrap();
        assert_eq!(roles, vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn reports_corrupt_json() {
        let result: Result<Vec<String>, _> = parse_json_column("game", "players", "not json");
        assert!(matches!(
            result,
            Err(AppError::InternalErr(InternalError::CorruptJson { .. }))
        ));
    }

    #[test]
    fn shortens_long_ids_only() {
        assert_eq!(shorten_id("1234567890"), "12345678...");
        assert_eq!(shorten_id("1234"), "1234");
    }
}
