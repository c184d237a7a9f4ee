use std::sync::LazyLock;

use regex::Regex;

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Check whether a name is a valid Python identifier.
///
/// Generated names are embedded verbatim into class names, import paths and
/// URL prefixes, so this is the only gate keeping them quote-safe.
pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER_RE.is_match(name)
}

/// Python `str.capitalize` semantics: first character uppercased, the rest
/// lowercased. "widget" -> "Widget", "WIDGET" -> "Widget".
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let upper: String = first.to_uppercase().collect();
            upper + &chars.as_str().to_lowercase()
        }
        None => String::new(),
    }
}
