//! TypeScript import builder.

use suigen_codegen::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    fn statement(&self) -> String {
        let type_kw = if self.type_only { "type " } else { "" };

        if self.named.is_empty() {
            return format!("import \"{}\";", self.from);
        }
        format!(
            "import {}{{ {} }} from \"{}\";",
            type_kw,
            self.named.join(", "),
            self.from
        )
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.statement())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_import() {
        let i = Import::new("./utils").named("foo").named("bar").build();
        assert_eq!(i, "import { foo, bar } from \"./utils\";\n");
    }

    #[test]
    fn test_type_only_import() {
        let i = Import::new("@mysten/sui/transactions")
            .named("Transaction")
            .named("TransactionResult")
            .type_only()
            .build();
        assert_eq!(
            i,
            "import type { Transaction, TransactionResult } from \"@mysten/sui/transactions\";\n"
        );
    }

    #[test]
    fn test_side_effect_import() {
        let i = Import::new("./polyfill").build();
        assert_eq!(i, "import \"./polyfill\";\n");
    }
}
