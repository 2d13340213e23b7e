//! Move type representation.

use serde::{Deserialize, Serialize};

/// A Move type as it appears in a normalized module.
///
/// Serializes to the same shape the Sui RPC returns: primitive tags are bare
/// strings (`"U64"`), wrappers are single-key objects (`{"Vector": "U8"}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaType {
    Bool,
    U8,
    U16,
    U32,
    U64,
    U128,
    U256,
    Address,
    Signer,
    Vector(Box<SchemaType>),
    Reference(Box<SchemaType>),
    MutableReference(Box<SchemaType>),
    TypeParameter(u16),
    Struct(StructTag),
}

impl SchemaType {
    /// Shorthand for `Vector(inner)`.
    pub fn vector(inner: SchemaType) -> Self {
        Self::Vector(Box::new(inner))
    }

    /// Shorthand for `Reference(inner)`.
    pub fn reference(inner: SchemaType) -> Self {
        Self::Reference(Box::new(inner))
    }

    /// Shorthand for `MutableReference(inner)`.
    pub fn mutable_reference(inner: SchemaType) -> Self {
        Self::MutableReference(Box::new(inner))
    }

    /// Shorthand for a struct type.
    pub fn structure(tag: StructTag) -> Self {
        Self::Struct(tag)
    }

    /// The struct tag behind this type, looking through one reference layer.
    pub fn struct_tag(&self) -> Option<&StructTag> {
        match self {
            Self::Struct(tag) => Some(tag),
            Self::Reference(inner) | Self::MutableReference(inner) => match inner.as_ref() {
                Self::Struct(tag) => Some(tag),
                _ => None,
            },
            _ => None,
        }
    }
}

/// A fully qualified struct reference with its type arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructTag {
    pub address: String,
    pub module: String,
    pub name: String,
    #[serde(default)]
    pub type_arguments: Vec<SchemaType>,
}

impl StructTag {
    pub fn new(
        address: impl Into<String>,
        module: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            module: module.into(),
            name: name.into(),
            type_arguments: Vec::new(),
        }
    }

    /// Add a type argument.
    pub fn type_arg(mut self, ty: SchemaType) -> Self {
        self.type_arguments.push(ty);
        self
    }

    /// Check module and name, ignoring the address.
    pub fn is_named(&self, module: &str, name: &str) -> bool {
        self.module == module && self.name == name
    }

    /// Check address, module and name. Addresses are compared in normalized
    /// form, so `0x2` matches `0x0000…0002`.
    pub fn is(&self, address: &str, module: &str, name: &str) -> bool {
        self.is_named(module, name) && same_address(&self.address, address)
    }
}

/// Compare two hex addresses ignoring the `0x` prefix, leading zeros and case.
pub fn same_address(a: &str, b: &str) -> bool {
    let a = trim_address(a);
    let b = trim_address(b);
    a.eq_ignore_ascii_case(b)
}

fn trim_address(addr: &str) -> &str {
    let digits = addr.strip_prefix("0x").unwrap_or(addr);
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() { "0" } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_deserializes_from_string() {
        let ty: SchemaType = serde_json::from_str("\"U64\"").unwrap();
        assert_eq!(ty, SchemaType::U64);
    }

    #[test]
    fn test_wrappers_deserialize_from_single_key_objects() {
        let ty: SchemaType = serde_json::from_str(r#"{"Vector": {"Reference": "U8"}}"#).unwrap();
        assert_eq!(
            ty,
            SchemaType::vector(SchemaType::reference(SchemaType::U8))
        );

        let ty: SchemaType = serde_json::from_str(r#"{"TypeParameter": 1}"#).unwrap();
        assert_eq!(ty, SchemaType::TypeParameter(1));
    }

    #[test]
    fn test_struct_deserializes_with_type_arguments() {
        let ty: SchemaType = serde_json::from_str(
            r#"{"Struct": {"address": "0x2", "module": "table", "name": "Table", "typeArguments": ["Address", "U64"]}}"#,
        )
        .unwrap();
        let SchemaType::Struct(tag) = ty else {
            panic!("expected struct");
        };
        assert!(tag.is_named("table", "Table"));
        assert_eq!(tag.type_arguments, vec![SchemaType::Address, SchemaType::U64]);
    }

    #[test]
    fn test_serialization_matches_rpc_shape() {
        let ty = SchemaType::mutable_reference(SchemaType::Struct(StructTag::new(
            "0x2",
            "tx_context",
            "TxContext",
        )));
        let json = serde_json::to_string(&ty).unwrap();
        assert_eq!(
            json,
            r#"{"MutableReference":{"Struct":{"address":"0x2","module":"tx_context","name":"TxContext","typeArguments":[]}}}"#
        );
    }

    #[test]
    fn test_same_address_normalizes() {
        assert!(same_address("0x2", "0x2"));
        assert!(same_address(
            "0x0000000000000000000000000000000000000000000000000000000000000002",
            "0x2"
        ));
        assert!(same_address("0xAB", "0xab"));
        assert!(same_address("0x0", "0x000"));
        assert!(!same_address("0x2", "0x20"));
    }

    #[test]
    fn test_struct_tag_looks_through_one_reference() {
        let tag = StructTag::new("0x2", "clock", "Clock");
        let by_ref = SchemaType::reference(SchemaType::Struct(tag.clone()));
        assert_eq!(by_ref.struct_tag(), Some(&tag));
        assert_eq!(SchemaType::U8.struct_tag(), None);
        assert_eq!(
            SchemaType::vector(SchemaType::Struct(tag)).struct_tag(),
            None
        );
    }
}
