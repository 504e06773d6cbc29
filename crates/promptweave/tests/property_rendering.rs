//! Property tests over the rendering invariants.

use promptweave::{normalize, Formatters};
use proptest::prelude::*;
use serde_json::{json, Value};

// Strategy for arbitrary interpolated values, a few levels deep.
fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-zA-Z0-9 .\n]{0,20}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::hash_map("[a-z]{1,6}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn fragment_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ \ta-zA-Z0-9.:\n]{0,30}", 1..4)
}

proptest! {
    #[test]
    fn test_normalize_is_idempotent(s in "[ \t\na-zA-Z0-9.=-]{0,200}") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_condition_false_always_empty(
        name in "[a-zA-Z ]{0,12}",
        fragments in fragment_strategy(),
        value in value_strategy(),
    ) {
        let r = Formatters::new().build();
        let fragments: Vec<&str> = fragments.iter().map(String::as_str).collect();
        let out = r.named(name).when(false).render(&fragments, &[value]);
        prop_assert_eq!(out, "");
    }

    #[test]
    fn test_blank_content_suppresses_any_name(name in "[a-zA-Z ]{1,12}") {
        let r = Formatters::new().build();
        let out = r.named(name).render(&["\n  \t \n"], &[]);
        prop_assert_eq!(out, "");
    }

    #[test]
    fn test_unnamed_output_is_normalize_stable(
        fragments in fragment_strategy(),
        value in value_strategy(),
    ) {
        let r = Formatters::new().build();
        let fragments: Vec<&str> = fragments.iter().map(String::as_str).collect();
        let out = r.unnamed().render(&fragments, &[value]);
        prop_assert_eq!(normalize(&out), out);
    }

    #[test]
    fn test_render_never_panics_on_arbitrary_values(
        fragments in fragment_strategy(),
        values in prop::collection::vec(value_strategy(), 0..4),
    ) {
        let r = Formatters::new().build();
        let fragments: Vec<&str> = fragments.iter().map(String::as_str).collect();
        let _ = r.named("Anything").render(&fragments, &values);
    }
}
