//! Package, module, struct and function descriptors.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::SchemaType;

/// Move ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    Copy,
    Drop,
    Store,
    Key,
}

/// A set of abilities, serialized as `{"abilities": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySet {
    #[serde(default)]
    pub abilities: Vec<Ability>,
}

/// Type parameter declared on a struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructTypeParameter {
    #[serde(default)]
    pub constraints: AbilitySet,
    #[serde(default)]
    pub is_phantom: bool,
}

/// A named struct field. Field order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: SchemaType,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: SchemaType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A struct definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Struct {
    #[serde(default)]
    pub abilities: AbilitySet,
    #[serde(default)]
    pub type_parameters: Vec<StructTypeParameter>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Struct {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field.
    pub fn field(mut self, name: impl Into<String>, ty: SchemaType) -> Self {
        self.fields.push(Field::new(name, ty));
        self
    }
}

/// A function parameter; serialized as the bare type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameter {
    pub ty: SchemaType,
}

impl From<SchemaType> for Parameter {
    fn from(ty: SchemaType) -> Self {
        Self { ty }
    }
}

/// Function visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Public,
    Friend,
    Private,
}

/// An exposed function signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub is_entry: bool,
    #[serde(default)]
    pub type_parameters: Vec<AbilitySet>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default, rename = "return")]
    pub returns: Vec<SchemaType>,
}

impl Function {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn param(mut self, ty: SchemaType) -> Self {
        self.parameters.push(ty.into());
        self
    }

    /// Declare a type parameter with no constraints.
    pub fn type_param(mut self) -> Self {
        self.type_parameters.push(AbilitySet::default());
        self
    }

    /// Mark as an entry function.
    pub fn entry(mut self) -> Self {
        self.is_entry = true;
        self
    }

    pub fn has_type_parameters(&self) -> bool {
        !self.type_parameters.is_empty()
    }
}

/// Reference to a friend module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleId {
    pub address: String,
    pub name: String,
}

/// A normalized Move module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_format_version: Option<u32>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub friends: Vec<ModuleId>,
    #[serde(default)]
    pub structs: IndexMap<String, Struct>,
    #[serde(default)]
    pub exposed_functions: IndexMap<String, Function>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a struct. A repeated name replaces the earlier definition in place.
    pub fn with_struct(mut self, name: impl Into<String>, def: Struct) -> Self {
        self.structs.insert(name.into(), def);
        self
    }

    /// Add an exposed function. A repeated name replaces the earlier one in place.
    pub fn with_function(mut self, name: impl Into<String>, def: Function) -> Self {
        self.exposed_functions.insert(name.into(), def);
        self
    }
}

/// All modules published under one package address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Package {
    pub address: String,
    pub modules: IndexMap<String, Module>,
}

impl Package {
    /// Build a package, filling in module names and addresses the snapshot left out.
    pub fn new(address: impl Into<String>, modules: IndexMap<String, Module>) -> Self {
        let address = address.into();
        let modules = modules
            .into_iter()
            .map(|(key, mut module)| {
                if module.name.is_empty() {
                    module.name = key.clone();
                }
                if module.address.is_empty() {
                    module.address = address.clone();
                }
                (key, module)
            })
            .collect();
        Self { address, modules }
    }

    /// Add a module keyed by its name.
    pub fn with_module(mut self, module: Module) -> Self {
        let mut module = module;
        if module.address.is_empty() {
            module.address = self.address.clone();
        }
        self.modules.insert(module.name.clone(), module);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Iterate `(module name, struct name, struct)` in declaration order.
    pub fn structs(&self) -> impl Iterator<Item = (&str, &str, &Struct)> {
        self.modules.iter().flat_map(|(module_name, module)| {
            module
                .structs
                .iter()
                .map(move |(name, def)| (module_name.as_str(), name.as_str(), def))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StructTag;

    const COUNTER_JSON: &str = r#"{
        "counter": {
            "fileFormatVersion": 6,
            "address": "0xabc",
            "name": "counter",
            "friends": [],
            "structs": {
                "Counter": {
                    "abilities": { "abilities": ["Key"] },
                    "typeParameters": [],
                    "fields": [
                        { "name": "id", "type": { "Struct": { "address": "0x2", "module": "object", "name": "UID", "typeArguments": [] } } },
                        { "name": "value", "type": "U64" },
                        { "name": "owner", "type": "Address" }
                    ]
                }
            },
            "exposedFunctions": {
                "increment": {
                    "visibility": "Public",
                    "isEntry": true,
                    "typeParameters": [],
                    "parameters": [
                        { "MutableReference": { "Struct": { "address": "0xabc", "module": "counter", "name": "Counter", "typeArguments": [] } } },
                        { "MutableReference": { "Struct": { "address": "0x2", "module": "tx_context", "name": "TxContext", "typeArguments": [] } } }
                    ],
                    "return": []
                }
            }
        }
    }"#;

    #[test]
    fn test_deserialize_rpc_modules() {
        let modules: IndexMap<String, Module> = serde_json::from_str(COUNTER_JSON).unwrap();
        let package = Package::new("0xabc", modules);

        let counter = &package.modules["counter"];
        assert_eq!(counter.file_format_version, Some(6));
        let fields: Vec<_> = counter.structs["Counter"]
            .fields
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(fields, ["id", "value", "owner"]);

        let increment = &counter.exposed_functions["increment"];
        assert!(increment.is_entry);
        assert_eq!(increment.parameters.len(), 2);
        assert!(
            increment.parameters[1]
                .ty
                .struct_tag()
                .is_some_and(|t| t.is("0x2", "tx_context", "TxContext"))
        );
    }

    #[test]
    fn test_missing_optional_sections_default() {
        let modules: IndexMap<String, Module> =
            serde_json::from_str(r#"{"empty": {}}"#).unwrap();
        let package = Package::new("0x1", modules);

        let module = &package.modules["empty"];
        assert_eq!(module.name, "empty");
        assert_eq!(module.address, "0x1");
        assert!(module.structs.is_empty());
        assert!(module.exposed_functions.is_empty());
    }

    #[test]
    fn test_module_order_is_preserved() {
        let modules: IndexMap<String, Module> =
            serde_json::from_str(r#"{"zeta": {}, "alpha": {}, "mid": {}}"#).unwrap();
        let names: Vec<_> = modules.keys().map(String::as_str).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_duplicate_struct_name_last_write_wins() {
        let module = Module::new("m")
            .with_struct("A", Struct::new().field("x", SchemaType::U8))
            .with_struct("B", Struct::new())
            .with_struct("A", Struct::new().field("y", SchemaType::Bool));

        let names: Vec<_> = module.structs.keys().map(String::as_str).collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(module.structs["A"].fields[0].name, "y");
    }

    #[test]
    fn test_structs_iterates_in_declaration_order() {
        let package = Package::default()
            .with_module(
                Module::new("b")
                    .with_struct("Two", Struct::new())
                    .with_struct("One", Struct::new()),
            )
            .with_module(Module::new("a").with_struct("Three", Struct::new()));

        let seen: Vec<_> = package.structs().map(|(m, s, _)| (m, s)).collect();
        assert_eq!(seen, [("b", "Two"), ("b", "One"), ("a", "Three")]);
    }

    #[test]
    fn test_round_trip_keeps_rpc_field_names() {
        let module = Module::new("pool").with_function(
            "swap",
            Function::new()
                .type_param()
                .param(SchemaType::Struct(StructTag::new("0x2", "coin", "Coin"))),
        );
        let json = serde_json::to_value(&module).unwrap();
        assert!(json.get("exposedFunctions").is_some());
        assert!(json["exposedFunctions"]["swap"].get("return").is_some());
        assert!(json["exposedFunctions"]["swap"].get("typeParameters").is_some());
        assert!(json.get("fileFormatVersion").is_none());
    }
}
