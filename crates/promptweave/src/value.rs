//! Plain-text conversion for interpolated values.

use serde_json::Value;

/// Converts a value to its plain display text.
///
/// Strings render verbatim (no JSON quoting), numbers and booleans use
/// their display form, and null contributes nothing. Arrays and objects
/// fall back to compact JSON — under a formatter registry those normally
/// route through registered formatters or the array/object strategies
/// before they reach this function.
///
/// # Example
///
/// ```rust
/// use promptweave::value_text;
/// use serde_json::json;
///
/// assert_eq!(value_text(&json!("plain")), "plain");
/// assert_eq!(value_text(&json!(42)), "42");
/// assert_eq!(value_text(&json!(true)), "true");
/// assert_eq!(value_text(&json!(null)), "");
/// ```
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_renders_verbatim() {
        assert_eq!(value_text(&json!("no quotes")), "no quotes");
    }

    #[test]
    fn test_numbers_and_bools() {
        assert_eq!(value_text(&json!(3)), "3");
        assert_eq!(value_text(&json!(19.5)), "19.5");
        assert_eq!(value_text(&json!(false)), "false");
    }

    #[test]
    fn test_null_is_empty() {
        assert_eq!(value_text(&json!(null)), "");
    }

    #[test]
    fn test_composites_fall_back_to_json() {
        assert_eq!(value_text(&json!({"a": 1})), "{\"a\":1}");
        assert_eq!(value_text(&json!([1, 2])), "[1,2]");
    }
}
