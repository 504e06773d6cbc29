//! Type-directed value formatting layered over the section renderer.
//!
//! [`Formatters`] collects an ordered list of `(predicate, formatter)`
//! entries plus the array and object fallback strategies, then
//! [`Formatters::build`] freezes them into a [`FormattingRenderer`]. The
//! renderer hands out [`BoundSection`]s with the same shape as the plain
//! [`Section`](promptweave_render::Section) API, so formatted and unformatted
//! renders compose freely.
//!
//! ## Dispatch Precedence
//!
//! Each interpolated value is transformed by the first rule that applies:
//!
//! 1. First registered predicate that matches the value — arrays included,
//!    so a caller-registered [`is_array`](crate::is_array) entry beats the
//!    aggregation below.
//! 2. Arrays with no direct match aggregate: an empty array contributes
//!    nothing; when one registered predicate matches every element the
//!    array strategy combines the elements under that entry's formatter;
//!    otherwise each element is formatted individually and the strategy
//!    joins the results.
//! 3. Objects with no match go to the object fallback.
//! 4. Everything else uses its plain string form (null becomes empty).

use std::sync::Arc;

use promptweave_render::Section;
use serde_json::Value;

use crate::formatter::{
    default_array_format, default_object_format, ArrayFormatFn, FormatterEntry, ObjectFormatFn,
};
use crate::value::value_text;

/// Ordered formatter registry, built once and then frozen.
///
/// # Example
///
/// ```rust
/// use promptweave::Formatters;
/// use serde_json::json;
///
/// let prompt = Formatters::new()
///     .add(
///         |v| v.get("kind") == Some(&json!("note")),
///         |v| format!("Note: {}", v["text"].as_str().unwrap_or("")),
///     )
///     .build();
///
/// let notes = json!([
///     {"kind": "note", "text": "Prefers concise answers"},
///     {"kind": "note", "text": "Works in UTC+2"},
/// ]);
///
/// let out = prompt
///     .named("Memory")
///     .render(&["Remember the following.\n\n", ""], &[notes]);
///
/// assert_eq!(
///     out,
///     "\n==== Memory ====\nRemember the following.\n\nNote: Prefers concise answers\n\nNote: Works in UTC+2\n==== End of Memory ====\n"
/// );
/// ```
pub struct Formatters {
    entries: Vec<FormatterEntry>,
    array_format: ArrayFormatFn,
    object_format: ObjectFormatFn,
}

impl Formatters {
    /// Creates an empty registry with the default array strategy (join
    /// formatted items with a blank line) and object fallback (compact
    /// JSON).
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            array_format: Arc::new(default_array_format),
            object_format: Arc::new(default_object_format),
        }
    }

    /// Registers a `(predicate, formatter)` pair. Entries are tried in
    /// registration order; when several predicates match the same value the
    /// first one registered wins.
    pub fn add<P, F>(mut self, predicate: P, format: F) -> Self
    where
        P: Fn(&Value) -> bool + Send + Sync + 'static,
        F: Fn(&Value) -> String + Send + Sync + 'static,
    {
        self.entries.push(FormatterEntry {
            predicate: Arc::new(predicate),
            format: Arc::new(format),
        });
        self
    }

    /// Replaces the array strategy. The strategy receives the items and a
    /// per-item formatter; for mixed arrays the items arrive pre-formatted
    /// as strings and the per-item formatter is the identity.
    pub fn array_formatter<F>(mut self, format: F) -> Self
    where
        F: Fn(&[Value], &(dyn Fn(&Value) -> String)) -> String + Send + Sync + 'static,
    {
        self.array_format = Arc::new(format);
        self
    }

    /// Replaces the object fallback used for composite values no predicate
    /// claims.
    pub fn object_formatter<F>(mut self, format: F) -> Self
    where
        F: Fn(&Value) -> String + Send + Sync + 'static,
    {
        self.object_format = Arc::new(format);
        self
    }

    /// Freezes the registry into a shareable renderer.
    pub fn build(self) -> FormattingRenderer {
        FormattingRenderer {
            registry: Arc::new(self),
        }
    }

    /// Transforms one interpolated value to display text by the dispatch
    /// precedence documented on the module.
    fn format_value(&self, value: &Value) -> String {
        if let Some(entry) = self.matching_entry(value) {
            return (entry.format)(value);
        }
        match value {
            Value::Array(items) => self.format_array(items),
            Value::Object(_) => (self.object_format)(value),
            other => value_text(other),
        }
    }

    fn matching_entry(&self, value: &Value) -> Option<&FormatterEntry> {
        self.entries.iter().find(|entry| (entry.predicate)(value))
    }

    fn format_array(&self, items: &[Value]) -> String {
        if items.is_empty() {
            return String::new();
        }

        // Homogeneous: the first predicate satisfied by every element
        // formats them all, through the array strategy.
        let homogeneous = self
            .entries
            .iter()
            .find(|entry| items.iter().all(|item| (entry.predicate)(item)));
        if let Some(entry) = homogeneous {
            let per_item = |item: &Value| (entry.format)(item);
            return (self.array_format)(items, &per_item);
        }

        // Mixed: format each element on its own, then combine the resulting
        // strings with the array strategy and an identity formatter.
        let formatted: Vec<Value> = items
            .iter()
            .map(|item| Value::String(self.format_element(item)))
            .collect();
        (self.array_format)(&formatted, &value_text)
    }

    /// Formats one element of a mixed array: own predicate first, then the
    /// object fallback for composites, then the plain string form.
    fn format_element(&self, value: &Value) -> String {
        if let Some(entry) = self.matching_entry(value) {
            return (entry.format)(value);
        }
        match value {
            Value::Object(_) => (self.object_format)(value),
            other => value_text(other),
        }
    }
}

impl Default for Formatters {
    fn default() -> Self {
        Self::new()
    }
}

/// A frozen formatter registry ready to render sections.
///
/// Cheap to clone and safe to share across threads; the underlying registry
/// is never mutated after [`Formatters::build`].
#[derive(Clone)]
pub struct FormattingRenderer {
    registry: Arc<Formatters>,
}

impl FormattingRenderer {
    /// Binds a section with an optional name and a condition, mirroring
    /// [`promptweave_render::section`].
    pub fn section(&self, name: Option<&str>, condition: bool) -> BoundSection {
        BoundSection {
            registry: Arc::clone(&self.registry),
            name: name.map(str::to_string),
            enabled: condition,
        }
    }

    /// Binds a named section with the condition set to true.
    pub fn named(&self, name: impl Into<String>) -> BoundSection {
        BoundSection {
            registry: Arc::clone(&self.registry),
            name: Some(name.into()),
            enabled: true,
        }
    }

    /// Binds an unnamed section with the condition set to true.
    pub fn unnamed(&self) -> BoundSection {
        BoundSection {
            registry: Arc::clone(&self.registry),
            name: None,
            enabled: true,
        }
    }
}

/// A section bound to a formatter registry.
///
/// Renders like [`Section`](promptweave_render::Section), but interpolated
/// values are arbitrary [`Value`]s transformed through the registry before
/// the whitespace and wrapping rules run.
pub struct BoundSection {
    registry: Arc<Formatters>,
    name: Option<String>,
    enabled: bool,
}

impl BoundSection {
    /// Gates the section on a condition.
    pub fn when(mut self, condition: bool) -> Self {
        self.enabled = condition;
        self
    }

    /// Renders interleaved fragments and values. A false condition
    /// short-circuits to the empty string before any formatter runs.
    pub fn render(&self, fragments: &[&str], values: &[Value]) -> String {
        self.render_with(fragments, values.iter())
    }

    /// Borrowing variant of [`render`](Self::render) for call sites that
    /// keep their values elsewhere.
    pub fn render_refs(&self, fragments: &[&str], values: &[&Value]) -> String {
        self.render_with(fragments, values.iter().copied())
    }

    fn render_with<'a>(
        &self,
        fragments: &[&str],
        values: impl Iterator<Item = &'a Value>,
    ) -> String {
        if !self.enabled {
            return String::new();
        }

        let texts: Vec<Option<String>> = values
            .map(|value| Some(self.registry.format_value(value)))
            .collect();

        let section = match self.name.as_deref() {
            Some(name) => Section::named(name),
            None => Section::new(),
        };
        section.render(fragments, &texts)
    }
}
