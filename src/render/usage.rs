//! Usage text assembly
//!
//! Combines the static prose of a [`HelpPage`] with a flag list and a rendered
//! example config into the text shown for `--help` or a bad config.

use super::example::render_example;
use crate::error::EncodeError;
use serde::Serialize;
use std::fmt::Write as _;

/// Static prose for a program's usage text.
#[derive(Debug, Clone, Copy)]
pub struct HelpPage {
    /// What the program does, one or more paragraphs.
    pub description: &'static str,
    /// Where to find installation instructions.
    pub install: &'static str,
    /// Invocation syntax, without the leading `Usage: `.
    pub invocation: &'static str,
    /// Config option names paired with their explanations.
    pub glossary: &'static [(&'static str, &'static str)],
}

/// Build the full usage text.
///
/// Sections appear in a fixed order: description, install pointer, invocation,
/// flags, example config file, then the option glossary. An encode failure
/// is returned rather than falling back to help without an example.
pub fn build_usage<T, N, D>(page: &HelpPage, defaults: &T, flags: &[(N, D)]) -> Result<String, EncodeError>
where
    T: Serialize,
    N: AsRef<str>,
    D: AsRef<str>,
{
    let example = render_example(defaults)?;

    let mut out = String::new();
    out.push_str("\n\n");
    out.push_str(page.description.trim_end());
    out.push_str("\n\n");
    let _ = writeln!(out, "See {}.", page.install);
    out.push('\n');
    let _ = writeln!(out, "Usage: {}", page.invocation);
    out.push('\n');

    out.push_str("Options:\n");
    for (name, description) in flags {
        let _ = writeln!(out, "  {}", name.as_ref());
        out.push_str(&indent(description.as_ref(), 8));
    }

    out.push_str("\nExample config file:\n\n");
    out.push_str(&example);
    out.push('\n');

    for (option, explanation) in page.glossary {
        let _ = writeln!(out, "{option}:");
        out.push('\n');
        out.push_str(&indent(explanation, 4));
        out.push('\n');
    }

    Ok(out)
}

/// Indent each non-blank line by `width` spaces, ending with a newline.
fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    let mut out = String::with_capacity(text.len() + width);
    for line in text.trim_end().lines() {
        if !line.trim().is_empty() {
            out.push_str(&pad);
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}
