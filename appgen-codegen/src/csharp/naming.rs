//! Identifier derivation from display names.

/// Converts a display name into a PascalCase identifier.
///
/// Characters other than ASCII letters, digits and underscores separate
/// words and are dropped. A leading digit gets an `_` prefix. Returns an
/// empty string when nothing usable remains.
#[must_use]
pub fn to_identifier(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut capitalize_next = true;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if capitalize_next {
                result.push(c.to_ascii_uppercase());
                capitalize_next = false;
            } else {
                result.push(c);
            }
        } else {
            capitalize_next = true;
        }
    }

    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }

    result
}

/// Flattens text for a single-line `//` comment. Line breaks become
/// spaces so the text cannot end the comment early.
#[must_use]
pub fn comment_text(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

/// Flattens text for a `///` XML doc comment and escapes `<`, `>` and `&`.
#[must_use]
pub fn doc_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\r' | '\n' => result.push(' '),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            _ => result.push(c),
        }
    }
    result
}
