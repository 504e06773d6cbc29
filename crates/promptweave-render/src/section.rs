//! Section rendering: interleave fragments with values, normalize, wrap.

use crate::normalize::normalize;

/// A named, optionally-conditional block of normalized text.
///
/// A `Section` interleaves literal text fragments with already-stringified
/// values, runs the result through [`normalize`], and wraps non-empty output
/// in header/footer markers when a name is set:
///
/// ```text
/// ==== <name> ====
/// <content>
/// ==== End of <name> ====
/// ```
///
/// The wrapped form carries a leading and trailing newline so that nesting a
/// rendered section inside an outer render produces visually separated
/// blocks once the outer normalization pass runs.
///
/// Rendering never fails: absent values contribute nothing, a false
/// condition yields the empty string, and content that normalizes to nothing
/// suppresses the section entirely (headers are never emitted around empty
/// content).
///
/// # Example
///
/// ```rust
/// use promptweave_render::Section;
///
/// let out = Section::named("Intro").render(&["  Hello   world.  "], &[]);
/// assert_eq!(out, "\n==== Intro ====\nHello world.\n==== End of Intro ====\n");
///
/// // Interpolation slots sit between fragments.
/// let out = Section::new().render(
///     &["status: ", ", retries: ", "."],
///     &[Some("ok".to_string()), Some("2".to_string())],
/// );
/// assert_eq!(out, "status: ok, retries: 2.");
/// ```
#[derive(Debug, Clone)]
pub struct Section {
    name: Option<String>,
    enabled: bool,
}

impl Section {
    /// Creates an unnamed section (no header/footer wrap).
    pub fn new() -> Self {
        Self {
            name: None,
            enabled: true,
        }
    }

    /// Creates a named section. A blank name (empty after trimming) behaves
    /// like an unnamed section.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            enabled: true,
        }
    }

    /// Gates the section on a condition. When the condition is false,
    /// [`render`](Self::render) returns the empty string without doing any
    /// work.
    pub fn when(mut self, condition: bool) -> Self {
        self.enabled = condition;
        self
    }

    /// Renders the section from interleaved fragments and values.
    ///
    /// Fragments and values interleave positionally:
    /// `fragments[0], values[0], fragments[1], values[1], …`. For a
    /// well-formed call `fragments.len() == values.len() + 1`, but the
    /// renderer tolerates any counts rather than failing: surplus values are
    /// appended after the last fragment. `None` values contribute nothing.
    pub fn render(&self, fragments: &[&str], values: &[Option<String>]) -> String {
        if !self.enabled {
            return String::new();
        }

        let mut raw = String::new();
        let mut slots = values.iter();
        for fragment in fragments {
            raw.push_str(fragment);
            if let Some(value) = slots.next() {
                if let Some(text) = value.as_deref() {
                    raw.push_str(text);
                }
            }
        }
        for value in slots {
            if let Some(text) = value.as_deref() {
                raw.push_str(text);
            }
        }

        let content = normalize(&raw);
        if content.is_empty() {
            return content;
        }

        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => {
                format!("\n==== {} ====\n{}\n==== End of {} ====\n", name, content, name)
            }
            _ => content,
        }
    }
}

impl Default for Section {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a [`Section`] from an optional name and a condition in one call.
///
/// Convenience for call sites that hold both as data rather than chaining
/// [`Section::named`] and [`Section::when`].
pub fn section(name: Option<&str>, condition: bool) -> Section {
    let section = match name {
        Some(name) => Section::named(name),
        None => Section::new(),
    };
    section.when(condition)
}
