//! Formatter entries, shared function types, and convenience predicates.

use std::sync::Arc;

use serde_json::Value;

use crate::value::value_text;

/// Decides whether a formatter applies to a value.
pub type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Formats one matched value into its display text.
pub type FormatFn = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// Combines an ordered sequence of items into one string, formatting each
/// item with the supplied per-item formatter.
pub type ArrayFormatFn =
    Arc<dyn Fn(&[Value], &(dyn Fn(&Value) -> String)) -> String + Send + Sync>;

/// Renders a composite value that no predicate claimed.
pub type ObjectFormatFn = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// One registered `(predicate, formatter)` pair. Entries are tried in
/// registration order and the first match wins.
pub(crate) struct FormatterEntry {
    pub(crate) predicate: Predicate,
    pub(crate) format: FormatFn,
}

/// Returns true when the value is an array.
///
/// Register a formatter under this predicate to take over whole arrays: a
/// direct predicate match beats the automatic array-aggregation path.
pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

/// Returns true when the value is a composite object.
pub fn is_object(value: &Value) -> bool {
    value.is_object()
}

/// Default array strategy: format each item and join with a blank line.
pub(crate) fn default_array_format(items: &[Value], format: &(dyn Fn(&Value) -> String)) -> String {
    items.iter().map(format).collect::<Vec<_>>().join("\n\n")
}

/// Default object fallback: the value's canonical text form (compact JSON).
pub(crate) fn default_object_format(value: &Value) -> String {
    value_text(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_array() {
        assert!(is_array(&json!([])));
        assert!(is_array(&json!([1, 2])));
        assert!(!is_array(&json!({"a": 1})));
        assert!(!is_array(&json!("text")));
    }

    #[test]
    fn test_is_object() {
        assert!(is_object(&json!({})));
        assert!(!is_object(&json!([])));
        assert!(!is_object(&json!(null)));
    }

    #[test]
    fn test_default_array_format_joins_with_blank_line() {
        let items = vec![json!("a"), json!("b"), json!("c")];
        let out = default_array_format(&items, &value_text);
        assert_eq!(out, "a\n\nb\n\nc");
    }

    #[test]
    fn test_default_array_format_single_item_has_no_separator() {
        let items = vec![json!("only")];
        assert_eq!(default_array_format(&items, &value_text), "only");
    }
}
