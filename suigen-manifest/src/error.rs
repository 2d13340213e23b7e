use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for suigen-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a schema snapshot error from a JSON error.
    pub fn schema_error(&self, package: impl Into<String>, source: serde_json::Error) -> Box<Error> {
        let span = json_error_span(&self.src, source.line(), source.column());
        Box::new(Error::Schema {
            src: self.named_source(),
            span,
            package: package.into(),
            source,
        })
    }

    /// Create a validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Create a validation error with a span.
    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: Some(span.into()),
            message: message.into(),
        })
    }

    /// Create an invalid package name error.
    pub fn invalid_name_error(
        &self,
        name: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidName {
            src: self.named_source(),
            span,
            name: name.into(),
            reason: reason.into(),
        })
    }

    /// Create an invalid package id error.
    pub fn invalid_package_id_error(
        &self,
        name: impl Into<String>,
        id: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidPackageId {
            src: self.named_source(),
            span,
            name: name.into(),
            id: id.into(),
        })
    }
}

/// Byte span of the character serde_json reported (1-based line and column).
///
/// Returns `None` when the position lies outside the source.
pub(crate) fn json_error_span(src: &str, line: usize, column: usize) -> Option<SourceSpan> {
    if line == 0 {
        return None;
    }

    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);

    if offset > src.len() {
        return None;
    }

    let len = usize::from(offset < src.len());
    Some(SourceSpan::from((offset, len)))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'suigen init' to create a suigen.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse suigen.toml")]
    #[diagnostic(code(suigen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(suigen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid package name '{name}'")]
    #[diagnostic(
        code(suigen::invalid_name),
        help("{reason}. Use letters, numbers, '-' and '_', starting with a letter.")
    )]
    InvalidName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid name")]
        span: Option<SourceSpan>,
        name: String,
        reason: String,
    },

    #[error("invalid package id '{id}' for '{name}'")]
    #[diagnostic(
        code(suigen::invalid_package_id),
        help("package ids are '0x' followed by 1 to 64 hexadecimal digits")
    )]
    InvalidPackageId {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a package id")]
        span: Option<SourceSpan>,
        name: String,
        id: String,
    },

    #[error("unknown network '{name}'")]
    #[diagnostic(code(suigen::unknown_network), help("configured networks: {available}"))]
    UnknownNetwork { name: String, available: String },

    #[error("no packages configured")]
    #[diagnostic(
        code(suigen::no_packages),
        help("add an entry under [packages], e.g. counter = \"0x123\"")
    )]
    NoPackages,

    #[error("invalid schema snapshot for '{package}'")]
    #[diagnostic(code(suigen::schema_error))]
    Schema {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid JSON here")]
        span: Option<SourceSpan>,
        package: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("package '{package}' has no modules in '{path}'")]
    #[diagnostic(
        code(suigen::empty_package),
        help("a schema snapshot is the normalized module map of the package")
    )]
    EmptyPackage { package: String, path: PathBuf },
}
