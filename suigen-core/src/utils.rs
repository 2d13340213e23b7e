//! Identifier sanitization.
//!
//! Every generated identifier goes through [`to_camel_case`] so the same
//! schema name always produces the same TypeScript name.

/// Collapse kebab/snake separators into camelCase
/// (e.g., "my-package" -> "myPackage", "tx_context" -> "txContext").
///
/// A separator followed by a letter is dropped and the letter uppercased.
/// Any other `-` becomes `_`; any other `_` is kept.
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' || c == '_' {
            match chars.peek() {
                Some(next) if next.is_alphabetic() => {
                    result.extend(next.to_uppercase());
                    chars.next();
                }
                _ => result.push('_'),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Uppercase the first character (e.g., "counter" -> "Counter").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Sanitize and capitalize, for type, guard and parse names
/// (e.g., "owned_counter" -> "OwnedCounter").
pub fn to_pascal_case(s: &str) -> String {
    capitalize(&to_camel_case(s))
}
