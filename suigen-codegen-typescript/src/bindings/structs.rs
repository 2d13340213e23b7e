//! Interfaces, type guards and parse functions for Move structs.

use suigen_codegen::{CodeFragment, TypeMapper};
use suigen_ir::{Package, Struct};

use crate::{
    ast::{Fn, Interface, Param},
    naming,
    type_mapper::TypeScriptTypeMapper,
};

/// One struct and the names of everything generated for it.
#[derive(Debug, Clone, Copy)]
pub struct StructBinding<'a> {
    pub module: &'a str,
    pub name: &'a str,
    pub def: &'a Struct,
}

/// Struct bindings in module order, then struct order.
pub fn struct_bindings(package: &Package) -> Vec<StructBinding<'_>> {
    package
        .structs()
        .map(|(module, name, def)| StructBinding { module, name, def })
        .collect()
}

impl StructBinding<'_> {
    pub fn interface_name(&self) -> String {
        naming::interface_name(self.module, self.name)
    }

    /// `export interface {Module}{Struct}Type { ... }` with fields in declaration order.
    pub fn interface(&self) -> Interface {
        self.def
            .fields
            .iter()
            .fold(Interface::new(self.interface_name()), |iface, field| {
                iface.field(&field.name, TypeScriptTypeMapper.map_type(&field.ty).to_string())
            })
    }

    /// Runtime type guard.
    ///
    /// Checks that every field is present and that string-typed fields hold
    /// strings. Other field types are only checked for presence.
    pub fn guard(&self) -> Fn {
        let guard = Fn::new(naming::guard_name(self.module, self.name))
            .param(Param::new("data", "unknown"))
            .returns(format!("data is {}", self.interface_name()))
            .body_line("if (!data || typeof data !== \"object\") return false;");

        let fields = &self.def.fields;
        if fields.is_empty() {
            return guard.body_line("return true;");
        }

        let required = quoted(fields.iter().map(|f| f.name.as_str()));
        let strings: Vec<&str> = fields
            .iter()
            .filter(|f| TypeScriptTypeMapper.map_type(&f.ty).is_string())
            .map(|f| f.name.as_str())
            .collect();

        let mut guard = guard
            .body_line("const obj = data as Record<string, unknown>;")
            .body_line("")
            .body_line(format!("const requiredFields = [{}] as const;", required))
            .body_fragment(for_each_field(
                "requiredFields",
                "if (!(field in obj)) return false;",
            ));

        if !strings.is_empty() {
            guard = guard
                .body_line("")
                .body_line(format!(
                    "const stringFields = [{}] as const;",
                    quoted(strings.into_iter())
                ))
                .body_fragment(for_each_field(
                    "stringFields",
                    "if (typeof obj[field] !== \"string\") return false;",
                ));
        }

        guard.body_line("").body_line("return true;")
    }

    /// Parse function returning the input itself when the guard accepts it.
    pub fn parse(&self) -> Fn {
        let interface = self.interface_name();
        Fn::new(naming::parse_name(self.module, self.name))
            .param(Param::new("json", "unknown"))
            .returns(format!("{} | null", interface))
            .body_line(format!(
                "return {}(json) ? json : null;",
                naming::guard_name(self.module, self.name)
            ))
    }
}

fn quoted<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names
        .map(|name| format!("\"{}\"", name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn for_each_field(list: &str, check: &str) -> CodeFragment {
    CodeFragment::block(
        format!("for (const field of {}) {{", list),
        vec![CodeFragment::line(check)],
        Some("}".to_string()),
    )
}

#[cfg(test)]
mod tests {
    use suigen_ir::{Module, SchemaType, StructTag};

    use super::*;

    fn uid() -> SchemaType {
        SchemaType::Struct(StructTag::new("0x2", "object", "UID"))
    }

    fn counter_package() -> Package {
        Package::new("0x123", Default::default()).with_module(
            Module::new("counter").with_struct(
                "Counter",
                Struct::new()
                    .field("id", uid())
                    .field("value", SchemaType::U64)
                    .field("owner", SchemaType::Address),
            ),
        )
    }

    #[test]
    fn test_interface_text() {
        let package = counter_package();
        let bindings = struct_bindings(&package);
        assert_eq!(bindings.len(), 1);
        assert_eq!(
            bindings[0].interface().build(),
            "export interface CounterCounterType {\n  id: { id: string };\n  value: string;\n  owner: string;\n}\n"
        );
    }

    #[test]
    fn test_guard_checks_presence_then_strings() {
        let package = counter_package();
        let guard = struct_bindings(&package)[0].guard().build();

        assert!(guard.starts_with(
            "export function isCounterCounterType(data: unknown): data is CounterCounterType {\n"
        ));
        assert!(guard.contains("const requiredFields = [\"id\", \"value\", \"owner\"] as const;"));
        assert!(guard.contains("const stringFields = [\"value\", \"owner\"] as const;"));
        assert!(guard.contains("    if (typeof obj[field] !== \"string\") return false;\n"));
        assert!(guard.ends_with("\n  return true;\n}\n"));
        assert!(!guard.contains(" \n"));
    }

    #[test]
    fn test_guard_without_string_fields_omits_type_checks() {
        let package = Package::new("0x1", Default::default()).with_module(
            Module::new("flags").with_struct(
                "Flags",
                Struct::new()
                    .field("on", SchemaType::Bool)
                    .field("level", SchemaType::U8),
            ),
        );
        let guard = struct_bindings(&package)[0].guard().build();

        assert!(guard.contains("requiredFields"));
        assert!(!guard.contains("stringFields"));
        assert!(!guard.contains("typeof obj[field]"));
    }

    #[test]
    fn test_guard_checks_number_fields_for_presence_only() {
        let package = Package::new("0x1", Default::default()).with_module(
            Module::new("game").with_struct(
                "Player",
                Struct::new()
                    .field("level", SchemaType::U8)
                    .field("name", SchemaType::Struct(StructTag::new("0x1", "string", "String")))
                    .field("wallet", SchemaType::Address),
            ),
        );
        let binding = struct_bindings(&package)[0];

        assert!(binding.interface().build().contains("  level: number;\n"));
        let guard = binding.guard().build();
        assert!(guard.contains("const requiredFields = [\"level\", \"name\", \"wallet\"] as const;"));
        assert!(guard.contains("const stringFields = [\"name\", \"wallet\"] as const;"));
    }

    #[test]
    fn test_zero_field_struct() {
        let package = Package::new("0x1", Default::default())
            .with_module(Module::new("marker").with_struct("Witness", Struct::new()));
        let binding = struct_bindings(&package)[0];

        assert_eq!(
            binding.interface().build(),
            "export interface MarkerWitnessType {}\n"
        );
        assert_eq!(
            binding.guard().build(),
            "export function isMarkerWitnessType(data: unknown): data is MarkerWitnessType {\n  if (!data || typeof data !== \"object\") return false;\n  return true;\n}\n"
        );
    }

    #[test]
    fn test_parse_text() {
        let package = counter_package();
        assert_eq!(
            struct_bindings(&package)[0].parse().build(),
            "export function parseCounterCounterType(json: unknown): CounterCounterType | null {\n  return isCounterCounterType(json) ? json : null;\n}\n"
        );
    }

    #[test]
    fn test_declaration_order() {
        let package = Package::new("0x1", Default::default())
            .with_module(
                Module::new("b")
                    .with_struct("Z", Struct::new())
                    .with_struct("A", Struct::new()),
            )
            .with_module(Module::new("a").with_struct("M", Struct::new()));

        let names: Vec<String> = struct_bindings(&package)
            .iter()
            .map(StructBinding::interface_name)
            .collect();
        assert_eq!(names, ["BZType", "BAType", "AMType"]);
    }
}
