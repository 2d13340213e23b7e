//! Indentation width for generated code.

/// Spaces per indentation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(pub usize);

impl Indent {
    /// Two spaces, as TypeScript and JSON are conventionally formatted.
    pub const TYPESCRIPT: Self = Self(2);

    /// Whitespace prefix for the given nesting level.
    pub fn at(&self, level: usize) -> String {
        " ".repeat(self.0 * level)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}
