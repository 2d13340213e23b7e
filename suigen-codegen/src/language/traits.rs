//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;
use suigen_ir::SchemaType;

/// Trait for language-specific binding generators.
///
/// Implement this trait to add support for generating bindings in a new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "typescript")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "ts")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written, in generation order
    pub written: Vec<PathBuf>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Trait for mapping schema types to language-specific types.
///
/// Implementations must be total: shapes the target language cannot express
/// map to an explicit "unknown" type instead of failing.
pub trait TypeMapper {
    /// The mapped type representation
    type Output;

    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a schema type to the target language
    fn map_type(&self, ty: &SchemaType) -> Self::Output;
}
