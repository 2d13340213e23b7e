//! CodeFile abstraction for structured TypeScript file generation.
//!
//! Provides a high-level API for generating TypeScript files with
//! a header comment, organized imports and body content.

use suigen_codegen::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::Import;

/// A structured representation of a TypeScript file.
///
/// Organizes code into header, imports and body. Each part is rendered in
/// order with blank lines between them.
///
/// # Example
///
/// ```
/// use suigen_codegen_typescript::{CodeFile, ast::{Const, Import}};
///
/// let code = CodeFile::new()
///     .header(["Generated file"])
///     .import(Import::new("./counter.abi").named("counterPackage"))
///     .add(Const::new("pkg", "counterPackage"))
///     .render();
///
/// assert_eq!(
///     code,
///     "/**\n * Generated file\n */\n\nimport { counterPackage } from \"./counter.abi\";\n\nexport const pkg = counterPackage;\n"
/// );
/// ```
#[derive(Default)]
pub struct CodeFile {
    header: Vec<String>,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header doc block lines. Empty lines render as ` *`.
    pub fn header(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.header = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add a body element only when `node` is `Some`.
    pub fn add_opt<R: Renderable>(self, node: Option<R>) -> Self {
        match node {
            Some(node) => self.add(node),
            None => self,
        }
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        let mut started = false;

        if !self.header.is_empty() {
            builder.push_doc_block(&self.header);
            started = true;
        }

        if !self.imports.is_empty() {
            if started {
                builder.push_blank();
            }
            for import in &self.imports {
                builder.emit(import);
            }
            started = true;
        }

        for fragments in &self.body {
            if started {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
            started = true;
        }

        builder.build()
    }
}

/// A commented group of declarations.
///
/// Renders `// {title}` followed by its items. Items are separated by a
/// blank line unless the section is compact.
#[derive(Debug, Clone)]
pub struct Section {
    title: String,
    items: Vec<Vec<CodeFragment>>,
    compact: bool,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
            compact: false,
        }
    }

    /// Render items on consecutive lines.
    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }

    /// Add an item to the section.
    pub fn item<R: Renderable>(mut self, node: R) -> Self {
        self.items.push(node.to_fragments());
        self
    }

    /// Add several items to the section.
    pub fn items<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        self.items
            .extend(nodes.into_iter().map(|node| node.to_fragments()));
        self
    }
}

impl Renderable for Section {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = vec![CodeFragment::Comment(self.title.clone())];

        for (i, item) in self.items.iter().enumerate() {
            if i > 0 && !self.compact {
                fragments.push(CodeFragment::Blank);
            }
            fragments.extend(item.iter().cloned());
        }

        fragments
    }
}
