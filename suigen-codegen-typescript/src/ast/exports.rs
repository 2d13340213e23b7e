//! TypeScript export builder.

use suigen_codegen::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript export statements.
#[derive(Debug, Clone, Default)]
pub struct Export {
    from: Option<String>,
    named: Vec<String>,
    type_only: bool,
}

impl Export {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-export from another module.
    pub fn from(mut self, module: impl Into<String>) -> Self {
        self.from = Some(module.into());
        self
    }

    /// Export a named item.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Make this a type-only export (`export type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    /// Build the export as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    fn statement(&self) -> Option<String> {
        let type_kw = if self.type_only { "type " } else { "" };

        match (&self.from, self.named.is_empty()) {
            // export * from "module"
            (Some(from), true) => Some(format!("export * from \"{}\";", from)),
            // export { a, b } from "module"
            (Some(from), false) => Some(format!(
                "export {}{{ {} }} from \"{}\";",
                type_kw,
                self.named.join(", "),
                from
            )),
            // export { a, b }
            (None, false) => Some(format!("export {}{{ {} }};", type_kw, self.named.join(", "))),
            (None, true) => None,
        }
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.statement().map(CodeFragment::Line).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_named() {
        let e = Export::new().named("foo").named("bar").build();
        assert_eq!(e, "export { foo, bar };\n");
    }

    #[test]
    fn test_re_export_all() {
        let e = Export::new().from("./counter.abi").build();
        assert_eq!(e, "export * from \"./counter.abi\";\n");
    }

    #[test]
    fn test_re_export_named() {
        let e = Export::new()
            .from("./counter.abi")
            .named("counterPackage")
            .build();
        assert_eq!(e, "export { counterPackage } from \"./counter.abi\";\n");
    }

    #[test]
    fn test_re_export_type_only() {
        let e = Export::new()
            .from("./types")
            .named("User")
            .type_only()
            .build();
        assert_eq!(e, "export type { User } from \"./types\";\n");
    }

    #[test]
    fn test_empty_export_renders_nothing() {
        assert_eq!(Export::new().build(), "");
    }
}
