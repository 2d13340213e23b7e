//! Line buffer that tracks nesting while fragments are emitted.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates generated source text line by line.
///
/// Every line ends with `\n`; lines with no content never carry indentation,
/// so output is free of trailing whitespace.
///
/// ```
/// use suigen_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::typescript();
/// builder
///     .push_comment("Type guards")
///     .emit(&CodeFragment::block(
///         "export function isCounter(data: unknown): data is Counter {",
///         vec![CodeFragment::line("return true;")],
///         Some("}".to_string()),
///     ));
/// assert_eq!(
///     builder.build(),
///     "// Type guards\nexport function isCounter(data: unknown): data is Counter {\n  return true;\n}\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Builder with 2-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line at the current nesting level.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if !s.is_empty() {
            self.buffer.push_str(&self.indent.at(self.level));
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add `/** text */`.
    pub fn push_jsdoc(&mut self, text: &str) -> &mut Self {
        self.push_line(&format!("/** {} */", text))
    }

    /// Add a `/** ... */` block, one ` * ` line per entry. Empty entries render as ` *`.
    pub fn push_doc_block(&mut self, lines: &[String]) -> &mut Self {
        self.push_line("/**");
        for line in lines {
            if line.is_empty() {
                self.push_line(" *");
            } else {
                self.push_line(&format!(" * {}", line));
            }
        }
        self.push_line(" */")
    }

    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.push_line(&format!("// {}", text))
    }

    /// Emit every fragment of a node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.level += 1;
                for f in body {
                    self.apply_fragment(f);
                }
                self.level -= 1;
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::JsDoc(text) => {
                self.push_jsdoc(&text);
            }
            CodeFragment::DocBlock(lines) => {
                self.push_doc_block(&lines);
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}
