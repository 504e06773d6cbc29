//! Deterministic whitespace normalization for composed template text.
//!
//! Prompt templates are usually written indented inside source code for
//! readability, and interpolated sub-sections carry their own leading and
//! trailing newlines from the header-wrap step. The [`normalize`] pipeline
//! absorbs both so the final text is independent of how the template was
//! laid out in source.
//!
//! The pipeline is idempotent: running it over already-normalized text is a
//! no-op.

/// Normalizes whitespace in composed template text.
///
/// Applies, in order:
///
/// 1. Collapse runs of three or more linebreaks (including runs interleaved
///    with whitespace-only lines) down to exactly two, leaving at most one
///    blank line between paragraphs.
/// 2. Trim leading and trailing whitespace from the whole string.
/// 3. Collapse runs of spaces and tabs (never newlines) to a single space.
/// 4. Remove a single leading space after each newline, undoing template
///    indentation.
/// 5. Final trim.
///
/// # Example
///
/// ```rust
/// use promptweave_render::normalize;
///
/// assert_eq!(normalize("One.\n\n\n\nTwo."), "One.\n\nTwo.");
/// assert_eq!(normalize("  padded\t\ttext  "), "padded text");
/// ```
pub fn normalize(text: &str) -> String {
    let collapsed = collapse_blank_runs(text);
    let horizontal = collapse_horizontal(collapsed.trim());
    strip_line_leading_space(&horizontal).trim().to_string()
}

/// Collapses every run of two or more consecutive blank lines to a single
/// empty line. A line counts as blank when it holds nothing but spaces and
/// tabs; a single blank line is kept as written (later stages clean up any
/// whitespace it carries).
fn collapse_blank_runs(text: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut run: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if line.trim().is_empty() {
            run.push(line);
        } else {
            flush_blank_run(&mut kept, &run);
            run.clear();
            kept.push(line);
        }
    }
    flush_blank_run(&mut kept, &run);

    kept.join("\n")
}

fn flush_blank_run<'a>(kept: &mut Vec<&'a str>, run: &[&'a str]) {
    if run.len() >= 2 {
        kept.push("");
    } else {
        kept.extend_from_slice(run);
    }
}

/// Collapses runs of spaces and tabs to a single space. Newlines are left
/// untouched so paragraph structure survives.
fn collapse_horizontal(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_run = false;

    for ch in text.chars() {
        if ch == ' ' || ch == '\t' {
            if !in_run {
                result.push(' ');
            }
            in_run = true;
        } else {
            in_run = false;
            result.push(ch);
        }
    }

    result
}

/// Removes one leading space after each newline. Runs after
/// [`collapse_horizontal`], so a line's indentation is at most one space and
/// this fully de-indents it.
fn strip_line_leading_space(text: &str) -> String {
    text.split('\n')
        .map(|line| line.strip_prefix(' ').unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_triple_newline_collapse() {
        assert_eq!(normalize("A\n\n\n\nB"), "A\n\nB");
        assert_eq!(normalize("A\n\n\nB"), "A\n\nB");
    }

    #[test]
    fn test_single_blank_line_preserved() {
        assert_eq!(normalize("A\n\nB"), "A\n\nB");
        assert_eq!(normalize("A\nB"), "A\nB");
    }

    #[test]
    fn test_whitespace_only_lines_in_run() {
        assert_eq!(normalize("A\n  \n\t\n   \nB"), "A\n\nB");
    }

    #[test]
    fn test_trims_ends() {
        assert_eq!(normalize("  \n\n  text  \n\n  "), "text");
    }

    #[test]
    fn test_horizontal_runs_collapse() {
        assert_eq!(normalize("a   b\t\tc"), "a b c");
    }

    #[test]
    fn test_newlines_not_collapsed_horizontally() {
        assert_eq!(normalize("a\nb"), "a\nb");
    }

    #[test]
    fn test_deindents_lines() {
        assert_eq!(normalize("first\n    second\n  third"), "first\nsecond\nthird");
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n \t \n  "), "");
    }

    #[test]
    fn test_idempotent_on_known_input() {
        let once = normalize("  A \n\n\n\n   B\tC  \n");
        assert_eq!(normalize(&once), once);
    }

    proptest! {
        #[test]
        fn test_idempotent(s in "[ \t\nA-Za-z0-9.,=-]{0,120}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn test_never_leaves_excess_blank_lines(s in "[ \t\nA-Za-z]{0,120}") {
            let out = normalize(&s);
            prop_assert!(!out.contains("\n\n\n"));
        }

        #[test]
        fn test_output_is_trimmed(s in "[ \t\nA-Za-z]{0,120}") {
            let out = normalize(&s);
            prop_assert_eq!(out.trim(), out.as_str());
        }
    }
}
