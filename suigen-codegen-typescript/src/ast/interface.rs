//! TypeScript interface builder.

use suigen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A member of a TypeScript interface.
#[derive(Debug, Clone)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    fields: Vec<InterfaceField>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a required field. Fields render in insertion order.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField::new(name, ty));
        self
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            return vec![CodeFragment::Line(format!(
                "export interface {} {{}}",
                self.name
            ))];
        }

        let body = self
            .fields
            .iter()
            .map(|field| CodeFragment::Line(format!("{}: {};", field.name, field.ty)))
            .collect();

        vec![CodeFragment::Block {
            header: format!("export interface {} {{", self.name),
            body,
            close: Some("}".to_string()),
        }]
    }
}
