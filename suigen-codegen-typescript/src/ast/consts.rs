//! TypeScript const declaration builder.

use suigen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::JsObject;

#[derive(Debug, Clone)]
enum ConstValue {
    /// Expression text; may span several lines.
    Raw(String),
    Object(JsObject),
}

/// Builder for TypeScript const declarations.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: ConstValue,
    exported: bool,
    as_const: bool,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: ConstValue::Raw(value.into()),
            exported: true,
            as_const: false,
        }
    }

    /// Declare a const whose value is an object literal.
    pub fn object(name: impl Into<String>, value: JsObject) -> Self {
        Self {
            name: name.into(),
            value: ConstValue::Object(value),
            exported: true,
            as_const: false,
        }
    }

    /// Make this const private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Append an `as const` assertion.
    pub fn as_const(mut self) -> Self {
        self.as_const = true;
        self
    }

    /// Build the const declaration as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    fn head(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        format!("{}const {} = ", export, self.name)
    }

    fn tail(&self) -> &'static str {
        if self.as_const { " as const;" } else { ";" }
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match &self.value {
            ConstValue::Object(obj) if !obj.is_empty() => vec![CodeFragment::Block {
                header: format!("{}{{", self.head()),
                body: obj.properties_to_fragments(),
                close: Some(format!("}}{}", self.tail())),
            }],
            ConstValue::Object(_) => {
                vec![CodeFragment::Line(format!("{}{{}}{}", self.head(), self.tail()))]
            }
            ConstValue::Raw(value) => {
                let lines: Vec<&str> = value.lines().collect();
                let last = lines.len().saturating_sub(1);

                if lines.len() <= 1 {
                    return vec![CodeFragment::Line(format!(
                        "{}{}{}",
                        self.head(),
                        value,
                        self.tail()
                    ))];
                }

                // Continuation lines keep their own indentation.
                lines
                    .iter()
                    .enumerate()
                    .map(|(i, line)| match i {
                        0 => CodeFragment::Line(format!("{}{}", self.head(), line)),
                        i if i == last => CodeFragment::Line(format!("{}{}", line, self.tail())),
                        _ => CodeFragment::Line(line.to_string()),
                    })
                    .collect()
            }
        }
    }
}
