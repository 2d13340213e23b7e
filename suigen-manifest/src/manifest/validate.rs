//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Longest package id: 32 bytes in hex.
const MAX_ID_DIGITS: usize = 64;

/// Parsing and validation context that carries source information.
///
/// Carries the current path through the manifest (e.g. `["testnet"]` while
/// validating `[networks.testnet.packages]`) for error messages.
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Span of a package name used as a key.
    pub fn find_key_span(&self, name: &str) -> Option<SourceSpan> {
        find_key_span(self.source.src(), name)
    }

    /// Span of a quoted string value.
    pub fn find_value_span(&self, value: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), value)
    }

    /// Package names start with a letter and contain letters, digits, `-` or `_`.
    pub fn validate_package_name(&self, name: &str) -> Result<()> {
        if let Some(reason) = validate_package_name(name) {
            let reason = if self.path.is_empty() {
                reason
            } else {
                format!("{} (network '{}')", reason, self.path_string())
            };
            return Err(self
                .source
                .invalid_name_error(name, reason, self.find_key_span(name)));
        }
        Ok(())
    }

    /// Package ids are `0x` followed by 1 to 64 hex digits.
    pub fn validate_package_id(&self, name: &str, id: &str) -> Result<()> {
        if !is_package_id(id) {
            return Err(self
                .source
                .invalid_package_id_error(name, id, self.find_value_span(id)));
        }
        Ok(())
    }
}

/// Returns `None` if valid, `Some(reason)` otherwise.
pub(crate) fn validate_package_name(name: &str) -> Option<String> {
    let Some(first) = name.chars().next() else {
        return Some("name cannot be empty".to_string());
    };

    if !first.is_ascii_alphabetic() {
        return Some(format!("name must start with a letter, found '{}'", first));
    }

    name.chars()
        .find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '_')
        .map(|c| format!("name contains invalid character '{}'", c))
}

pub(crate) fn is_package_id(id: &str) -> bool {
    id.strip_prefix("0x").is_some_and(|digits| {
        (1..=MAX_ID_DIGITS).contains(&digits.len())
            && digits.chars().all(|c| c.is_ascii_hexdigit())
    })
}

/// Find a name used as a TOML key: `name =` at line start, or `.name]` in a header.
pub(crate) fn find_key_span(src: &str, name: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        if let Some(rest) = trimmed.strip_prefix(name)
            && rest.trim_start().starts_with('=')
        {
            return Some(SourceSpan::from((offset + indent, name.len())));
        }
        offset += line.len();
    }

    let header = format!(".{}]", name);
    src.find(&header)
        .map(|pos| SourceSpan::from((pos + 1, name.len())))
}

/// Find a string value in double or single quotes; the span excludes the quotes.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    [format!("\"{}\"", value), format!("'{}'", value)]
        .iter()
        .find_map(|pattern| src.find(pattern.as_str()))
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}
