//! # Promptweave Render - Section-Based Prompt Text Rendering
//!
//! `promptweave-render` turns interleaved literal fragments and
//! already-stringified values into one clean, optionally-headered block of
//! text. It is the rendering foundation for the `promptweave` formatting
//! layer, but can be used on its own whenever deterministic prompt text is
//! all that is needed.
//!
//! ## Core Concepts
//!
//! - [`Section`]: a named, optionally-conditional block of text
//! - [`normalize`]: the idempotent whitespace pipeline every render goes
//!   through
//! - [`section`]: build a `Section` from an optional name and a condition
//!
//! ## Quick Start
//!
//! ```rust
//! use promptweave_render::Section;
//!
//! let out = Section::named("Instructions").render(
//!     &["
//!         You are a careful reviewer.
//!         Project: ", "
//!     "],
//!     &[Some("promptweave".to_string())],
//! );
//!
//! assert_eq!(
//!     out,
//!     "\n==== Instructions ====\nYou are a careful reviewer.\nProject: promptweave\n==== End of Instructions ====\n"
//! );
//! ```
//!
//! Templates can be written indented inside source for readability; the
//! normalization pass removes the indentation, collapses runs of blank
//! lines, and trims the ends, so the output never depends on source layout.
//!
//! ## Nesting
//!
//! A rendered section is just a string, so it can be interpolated into
//! another render. The wrap template's leading and trailing newlines plus
//! the outer normalization pass keep nested blocks visually separated:
//!
//! ```rust
//! use promptweave_render::Section;
//!
//! let inner = Section::named("Context").render(&["The user is offline."], &[]);
//! let outer = Section::new().render(&["Answer briefly.\n", "\nEnd."], &[Some(inner)]);
//!
//! assert_eq!(
//!     outer,
//!     "Answer briefly.\n\n==== Context ====\nThe user is offline.\n==== End of Context ====\n\nEnd."
//! );
//! ```
//!
//! ## Conditions and Empty Content
//!
//! Sections are gated with [`Section::when`]; a false condition short-circuits
//! to the empty string. Content that normalizes to nothing also produces the
//! empty string, header included — an empty section leaves no footprint:
//!
//! ```rust
//! use promptweave_render::Section;
//!
//! assert_eq!(Section::named("Hidden").when(false).render(&["secret"], &[]), "");
//! assert_eq!(Section::named("Empty").render(&["\n  \n"], &[]), "");
//! ```

mod normalize;
mod section;

pub use normalize::normalize;
pub use section::{section, Section};
