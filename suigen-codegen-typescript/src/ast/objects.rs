//! TypeScript/JavaScript object literal builder.

use suigen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::fns::{Param, format_params, line_fragment};

/// A property in a JavaScript object literal.
#[derive(Debug, Clone)]
pub struct Property {
    pub key: String,
    pub value: PropertyValue,
}

/// The value of an object property.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    /// A raw expression (will not be quoted).
    Raw(String),
    /// `key,` where the key names a variable in scope.
    Shorthand,
    /// A nested object.
    Object(JsObject),
    /// A method definition; the key is the method name.
    Method(Method),
    /// `...expr,`; the key holds the spread expression.
    Spread,
}

impl Property {
    /// Create a property with a raw expression value (will not be quoted).
    pub fn raw(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: PropertyValue::Raw(value.into()),
        }
    }

    /// Create a property with a nested object value.
    pub fn object(key: impl Into<String>, value: JsObject) -> Self {
        Self {
            key: key.into(),
            value: PropertyValue::Object(value),
        }
    }

    /// Create a shorthand property where key equals the variable name.
    pub fn shorthand(name: impl Into<String>) -> Self {
        Self {
            key: name.into(),
            value: PropertyValue::Shorthand,
        }
    }

    fn to_fragment(&self) -> CodeFragment {
        match &self.value {
            PropertyValue::Raw(s) => CodeFragment::Line(format!("{}: {},", self.key, s)),
            PropertyValue::Shorthand => CodeFragment::Line(format!("{},", self.key)),
            PropertyValue::Spread => CodeFragment::Line(format!("...{},", self.key)),
            PropertyValue::Object(obj) if obj.is_empty() => {
                CodeFragment::Line(format!("{}: {{}},", self.key))
            }
            PropertyValue::Object(obj) => CodeFragment::Block {
                header: format!("{}: {{", self.key),
                body: obj.properties_to_fragments(),
                close: Some("},".to_string()),
            },
            PropertyValue::Method(method) => method.to_fragment(&self.key),
        }
    }
}

/// A method definition for use inside an object literal.
///
/// Signatures with more than one parameter are laid out one parameter per line.
#[derive(Debug, Clone, Default)]
pub struct Method {
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<CodeFragment>,
}

impl Method {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a body line. An empty line renders as a blank line.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line_fragment(line.into()));
        self
    }

    /// Add an already-structured body fragment.
    pub fn body_fragment(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }

    fn to_fragment(&self, name: &str) -> CodeFragment {
        let ret = match &self.return_type {
            Some(ty) => format!(": {}", ty),
            None => String::new(),
        };

        if self.params.len() <= 1 {
            return CodeFragment::Block {
                header: format!("{}({}){} {{", name, format_params(&self.params), ret),
                body: self.body.clone(),
                close: Some("},".to_string()),
            };
        }

        let params = self
            .params
            .chunks(1)
            .map(|param| CodeFragment::Line(format!("{},", format_params(param))))
            .collect();

        CodeFragment::Sequence(vec![
            CodeFragment::Block {
                header: format!("{}(", name),
                body: params,
                close: None,
            },
            CodeFragment::Block {
                header: format!("){} {{", ret),
                body: self.body.clone(),
                close: Some("},".to_string()),
            },
        ])
    }
}

/// Builder for JavaScript/TypeScript object literals.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property with a raw expression value (will not be quoted).
    pub fn raw(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property::raw(key, value));
        self
    }

    /// Add a property with a nested object value.
    pub fn object(mut self, key: impl Into<String>, value: JsObject) -> Self {
        self.properties.push(Property::object(key, value));
        self
    }

    /// Add a shorthand property where key equals the variable name.
    pub fn shorthand(mut self, name: impl Into<String>) -> Self {
        self.properties.push(Property::shorthand(name));
        self
    }

    /// Add a method definition.
    pub fn method(mut self, name: impl Into<String>, method: Method) -> Self {
        self.properties.push(Property {
            key: name.into(),
            value: PropertyValue::Method(method),
        });
        self
    }

    /// Add a spread of `expr` into the object.
    pub fn spread(mut self, expr: impl Into<String>) -> Self {
        self.properties.push(Property {
            key: expr.into(),
            value: PropertyValue::Spread,
        });
        self
    }

    /// Conditionally add a spread.
    pub fn spread_if(self, condition: bool, expr: impl Into<String>) -> Self {
        if condition { self.spread(expr) } else { self }
    }

    /// Check if the object is empty.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Build the object as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    /// Convert properties to code fragments.
    pub(crate) fn properties_to_fragments(&self) -> Vec<CodeFragment> {
        self.properties.iter().map(Property::to_fragment).collect()
    }
}

impl Renderable for JsObject {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.properties.is_empty() {
            return vec![CodeFragment::Line("{}".to_string())];
        }

        vec![CodeFragment::Block {
            header: "{".to_string(),
            body: self.properties_to_fragments(),
            close: Some("}".to_string()),
        }]
    }
}
