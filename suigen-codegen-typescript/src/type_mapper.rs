//! TypeScript type mapper implementation.

use std::fmt;

use suigen_codegen::TypeMapper;
use suigen_ir::{SchemaType, StructTag};

/// A TypeScript type expression produced by the mapper.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TsType {
    Boolean,
    Number,
    String,
    Uint8Array,
    Array(Box<TsType>),
    /// On-chain handle (`{ id: string }`) standing in for data not inlined.
    IdHandle,
    Unknown,
}

impl TsType {
    pub fn array(inner: TsType) -> Self {
        Self::Array(Box::new(inner))
    }

    /// True for types the generated validators check at runtime.
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }
}

impl fmt::Display for TsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => f.write_str("boolean"),
            Self::Number => f.write_str("number"),
            Self::String => f.write_str("string"),
            Self::Uint8Array => f.write_str("Uint8Array"),
            Self::Array(inner) => write!(f, "{}[]", inner),
            Self::IdHandle => f.write_str("{ id: string }"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

/// Framework structs the mapper knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownStruct<'a> {
    /// `string::String`
    Utf8String,
    /// `vec_set::VecSet<T>`
    VecSet(&'a SchemaType),
    /// `table::Table<K, V>` or `object_table::ObjectTable<K, V>`
    Table {
        key: &'a SchemaType,
        value: &'a SchemaType,
    },
    /// `0x2::object::UID`
    Uid,
    Other,
}

impl<'a> KnownStruct<'a> {
    /// Classify a struct tag. Checks run in mapping priority order.
    pub fn classify(tag: &'a StructTag) -> Self {
        let module = tag.module.as_str();
        let name = tag.name.as_str();

        match (module, name, tag.type_arguments.as_slice()) {
            ("string", "String", _) => Self::Utf8String,
            ("vec_set", "VecSet", [elem]) => Self::VecSet(elem),
            ("table" | "object_table", "Table" | "ObjectTable", [key, value]) => {
                Self::Table { key, value }
            }
            _ if tag.is("0x2", "object", "UID") => Self::Uid,
            _ => Self::Other,
        }
    }
}

/// Parameters the Sui runtime injects on its own (`&mut TxContext`).
///
/// `Clock` and `Random` are not implicit; callers pass them explicitly.
pub fn is_implicit_parameter(ty: &SchemaType) -> bool {
    ty.struct_tag()
        .is_some_and(|tag| tag.is("0x2", "tx_context", "TxContext"))
}

/// TypeScript type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    type Output = TsType;

    fn language(&self) -> &'static str {
        "typescript"
    }

    /// Total over `SchemaType`: never fails.
    fn map_type(&self, ty: &SchemaType) -> TsType {
        match ty {
            SchemaType::Bool => TsType::Boolean,
            SchemaType::U8 | SchemaType::U16 | SchemaType::U32 => TsType::Number,
            SchemaType::U64 | SchemaType::U128 | SchemaType::U256 | SchemaType::Address => {
                TsType::String
            }
            SchemaType::Vector(inner) => match inner.as_ref() {
                SchemaType::U8 => TsType::Uint8Array,
                other => TsType::array(self.map_type(other)),
            },
            SchemaType::Reference(inner) | SchemaType::MutableReference(inner) => {
                self.map_type(inner)
            }
            SchemaType::Struct(tag) => match KnownStruct::classify(tag) {
                KnownStruct::Utf8String => TsType::String,
                KnownStruct::VecSet(elem) => TsType::array(self.map_type(elem)),
                KnownStruct::Table { .. } | KnownStruct::Uid => TsType::IdHandle,
                KnownStruct::Other => TsType::Unknown,
            },
            SchemaType::TypeParameter(_) | SchemaType::Signer => TsType::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(address: &str, module: &str, name: &str) -> StructTag {
        StructTag::new(address, module, name)
    }

    fn render(ty: &SchemaType) -> String {
        TypeScriptTypeMapper.map_type(ty).to_string()
    }

    #[test]
    fn test_primitives() {
        assert_eq!(render(&SchemaType::Bool), "boolean");
        for ty in [SchemaType::U8, SchemaType::U16, SchemaType::U32] {
            assert_eq!(render(&ty), "number");
        }
        for ty in [
            SchemaType::U64,
            SchemaType::U128,
            SchemaType::U256,
            SchemaType::Address,
        ] {
            assert_eq!(render(&ty), "string");
        }
        assert_eq!(render(&SchemaType::Signer), "unknown");
    }

    #[test]
    fn test_byte_vector_wins_over_generic_vector() {
        assert_eq!(render(&SchemaType::vector(SchemaType::U8)), "Uint8Array");
        assert_eq!(render(&SchemaType::vector(SchemaType::U16)), "number[]");
        assert_ne!(
            TypeScriptTypeMapper.map_type(&SchemaType::vector(SchemaType::U8)),
            TypeScriptTypeMapper.map_type(&SchemaType::vector(SchemaType::U16))
        );
    }

    #[test]
    fn test_nested_byte_vector() {
        let ty = SchemaType::vector(SchemaType::vector(SchemaType::U8));
        assert_eq!(render(&ty), "Uint8Array[]");
    }

    #[test]
    fn test_references_are_transparent() {
        assert_eq!(render(&SchemaType::reference(SchemaType::U64)), "string");
        assert_eq!(
            render(&SchemaType::mutable_reference(SchemaType::Bool)),
            "boolean"
        );
    }

    #[test]
    fn test_utf8_string() {
        let ty = SchemaType::Struct(tag("0x1", "string", "String"));
        assert_eq!(render(&ty), "string");
    }

    #[test]
    fn test_vec_set() {
        let ty = SchemaType::Struct(tag("0x2", "vec_set", "VecSet").type_arg(SchemaType::Address));
        assert_eq!(render(&ty), "string[]");

        let no_args = SchemaType::Struct(tag("0x2", "vec_set", "VecSet"));
        assert_eq!(render(&no_args), "unknown");
    }

    #[test]
    fn test_tables_map_to_handle() {
        for (module, name) in [("table", "Table"), ("object_table", "ObjectTable")] {
            let ty = SchemaType::Struct(
                tag("0x2", module, name)
                    .type_arg(SchemaType::Address)
                    .type_arg(SchemaType::U64),
            );
            assert_eq!(render(&ty), "{ id: string }");
        }

        let one_arg = SchemaType::Struct(tag("0x2", "table", "Table").type_arg(SchemaType::U8));
        assert_eq!(render(&one_arg), "unknown");
    }

    #[test]
    fn test_uid_requires_framework_address() {
        let uid = SchemaType::Struct(tag("0x2", "object", "UID"));
        assert_eq!(render(&uid), "{ id: string }");

        let long = SchemaType::Struct(tag(
            "0x0000000000000000000000000000000000000000000000000000000000000002",
            "object",
            "UID",
        ));
        assert_eq!(render(&long), "{ id: string }");

        let impostor = SchemaType::Struct(tag("0xabc", "object", "UID"));
        assert_eq!(render(&impostor), "unknown");
    }

    #[test]
    fn test_fallbacks_are_unknown() {
        assert_eq!(render(&SchemaType::TypeParameter(0)), "unknown");
        assert_eq!(
            render(&SchemaType::Struct(tag("0xabc", "counter", "Counter"))),
            "unknown"
        );
        assert_eq!(
            render(&SchemaType::vector(SchemaType::TypeParameter(1))),
            "unknown[]"
        );
    }

    #[test]
    fn test_deep_nesting_terminates_and_mirrors_input() {
        let mut ty = SchemaType::U64;
        for depth in 0..200 {
            ty = if depth % 3 == 0 {
                SchemaType::reference(ty)
            } else {
                SchemaType::vector(ty)
            };
        }
        let rendered = render(&ty);
        let vectors = (0..200).filter(|d| d % 3 != 0).count();
        assert_eq!(rendered, format!("string{}", "[]".repeat(vectors)));
    }

    #[test]
    fn test_vec_set_of_uids() {
        let ty = SchemaType::Struct(
            tag("0x2", "vec_set", "VecSet").type_arg(SchemaType::Struct(tag("0x2", "object", "UID"))),
        );
        assert_eq!(render(&ty), "{ id: string }[]");
    }

    #[test]
    fn test_implicit_parameter_detection() {
        let ctx = SchemaType::mutable_reference(SchemaType::Struct(tag(
            "0x2",
            "tx_context",
            "TxContext",
        )));
        assert!(is_implicit_parameter(&ctx));
        assert!(is_implicit_parameter(&SchemaType::reference(
            SchemaType::Struct(tag("0x2", "tx_context", "TxContext"))
        )));

        let clock = SchemaType::reference(SchemaType::Struct(tag("0x2", "clock", "Clock")));
        assert!(!is_implicit_parameter(&clock));
        assert!(!is_implicit_parameter(&SchemaType::U64));
    }

    #[test]
    fn test_mapper_trait() {
        let mapper = TypeScriptTypeMapper;
        assert_eq!(mapper.language(), "typescript");
        assert_eq!(mapper.map_type(&SchemaType::Bool), TsType::Boolean);
    }
}
