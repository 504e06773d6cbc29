//! # Promptweave - Type-Directed Prompt Composition
//!
//! `promptweave` composes structured text blocks (primarily prompts for
//! language models) from literal fragments interleaved with interpolated
//! values. It layers an extensible, type-directed formatting step over the
//! section renderer from `promptweave-render`, which it re-exports.
//!
//! ## Core Concepts
//!
//! - [`Formatters`]: ordered `(predicate, formatter)` registry with
//!   configurable array and object fallback strategies
//! - [`FormattingRenderer`]: a frozen registry, cheap to clone and share
//! - [`BoundSection`]: one named/conditional render with formatted values
//! - [`Section`] / [`normalize`]: the underlying renderer, usable directly
//!   when values are already strings
//!
//! Values are [`serde_json::Value`]s, so any `Serialize` domain type drops
//! in via `serde_json::to_value`.
//!
//! ## Quick Start
//!
//! ```rust
//! use promptweave::Formatters;
//! use serde_json::json;
//!
//! let prompt = Formatters::new()
//!     .add(
//!         |v| v.get("kind") == Some(&json!("note")),
//!         |v| format!("Note: {}", v["text"].as_str().unwrap_or("")),
//!     )
//!     .build();
//!
//! let notes = json!([
//!     {"kind": "note", "text": "Prefers concise answers"},
//!     {"kind": "note", "text": "Works in UTC+2"},
//! ]);
//!
//! let out = prompt
//!     .named("Memory")
//!     .render(&["Remember the following.\n\n", ""], &[notes]);
//!
//! assert_eq!(
//!     out,
//!     "\n==== Memory ====\nRemember the following.\n\nNote: Prefers concise answers\n\nNote: Works in UTC+2\n==== End of Memory ====\n"
//! );
//! ```
//!
//! ## Dispatch Precedence
//!
//! Each interpolated value goes through, in order: first matching registered
//! predicate (arrays included — see [`is_array`]); array aggregation
//! (empty arrays vanish, homogeneous arrays share one formatter, mixed
//! arrays format element-wise); the object fallback; the plain string form.
//! See the [`registry`] module docs for the full rules.
//!
//! ## Composition
//!
//! A [`BoundSection`] renders to a plain string, so one section's output
//! interpolates into another — differently configured registries included —
//! and the outer normalization pass absorbs the inner block's padding:
//!
//! ```rust
//! use promptweave::Formatters;
//! use serde_json::json;
//!
//! let plain = Formatters::new().build();
//!
//! let inner = plain.named("Context").render(&["The user is offline."], &[]);
//! let outer = plain
//!     .unnamed()
//!     .render(&["Answer briefly.\n", "\nEnd."], &[json!(inner)]);
//!
//! assert_eq!(
//!     outer,
//!     "Answer briefly.\n\n==== Context ====\nThe user is offline.\n==== End of Context ====\n\nEnd."
//! );
//! ```

mod formatter;
pub mod registry;
mod value;

pub use formatter::{is_array, is_object, ArrayFormatFn, FormatFn, ObjectFormatFn, Predicate};
pub use registry::{BoundSection, Formatters, FormattingRenderer};
pub use value::value_text;

// Re-export the rendering foundation.
pub use promptweave_render::{normalize, section, Section};
