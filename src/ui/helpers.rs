//! Shared rendering utilities.
//!
//! Text truncation for card fields, HTML escaping for every value written into
//! markup, and placeholder substitution for label templates.
//!
//! # Example
//!
//! ```rust
//! use doctor_locator::ui::helpers::{escape_html, fill_template, truncate};
//!
//! assert_eq!(truncate("Cardiology", 4), "Card...");
//! assert_eq!(escape_html("<b>"), "&lt;b&gt;");
//! assert_eq!(fill_template("{count} found", &[("count", "3")]), "3 found");
//! ```

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Truncates `text` to `max` characters, appending [`ELLIPSIS`] when anything
/// was cut.
///
/// Counts Unicode scalar values, so multi-byte characters are never split.
/// Text of `max` characters or fewer is returned unchanged.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Escapes the five HTML-significant characters.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Replaces `{key}` placeholders with their values. Unknown placeholders are
/// left in place.
#[must_use]
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    values.iter().fold(template.to_string(), |text, (key, value)| {
        text.replace(&format!("{{{key}}}"), value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_text_at_or_under_budget() {
        assert_eq!(truncate("", 3), "");
        assert_eq!(truncate("abc", 3), "abc");
        assert_eq!(truncate("ab", 3), "ab");
    }

    #[test]
    fn truncate_cuts_to_exact_budget_plus_ellipsis() {
        let out = truncate("abcdef", 3);
        assert_eq!(out, "abc...");
        assert_eq!(out.chars().count(), 3 + ELLIPSIS.len());
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("Müller-Lüdenscheidt", 6), "Müller...");
        assert_eq!(truncate("Ñoño", 4), "Ñoño");
    }

    #[test]
    fn truncate_to_zero_keeps_only_marker() {
        assert_eq!(truncate("abc", 0), "...");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn escape_covers_attribute_quotes() {
        assert_eq!(
            escape_html(r#"O'Neil & "Sons" <clinic>"#),
            "O&#39;Neil &amp; &quot;Sons&quot; &lt;clinic&gt;"
        );
    }

    #[test]
    fn template_keeps_unknown_placeholders() {
        assert_eq!(
            fill_template("Page {current} of {total}", &[("current", "2")]),
            "Page 2 of {total}"
        );
    }
}
