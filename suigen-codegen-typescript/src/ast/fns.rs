//! TypeScript function builder.

use suigen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a TypeScript function or method.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Format a parameter list (without parentheses).
pub(crate) fn format_params(params: &[Param]) -> String {
    params
        .iter()
        .map(|p| format!("{}: {}", p.name, p.ty))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convert a body line to a fragment; an empty line becomes a blank line.
pub(crate) fn line_fragment(line: String) -> CodeFragment {
    if line.is_empty() {
        CodeFragment::Blank
    } else {
        CodeFragment::Line(line)
    }
}

/// Builder for TypeScript functions.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<CodeFragment>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a line to the function body. An empty line renders as a blank line.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line_fragment(line.into()));
        self
    }

    /// Add a structured body fragment, such as a nested block.
    pub fn body_fragment(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    fn format_signature(&self) -> String {
        let params = format_params(&self.params);

        match &self.return_type {
            Some(ret) => format!("export function {}({}): {} {{", self.name, params, ret),
            None => format!("export function {}({}) {{", self.name, params),
        }
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Block {
            header: self.format_signature(),
            body: self.body.clone(),
            close: Some("}".to_string()),
        }]
    }
}
