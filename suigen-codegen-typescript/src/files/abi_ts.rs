//! `{package}.abi.ts` generator.

use std::path::{Path, PathBuf};

use suigen_codegen::CodeFragment;
use suigen_core::GeneratedFile;
use suigen_ir::Package;

use crate::{
    ast::{Const, Import, TypeAlias},
    bindings::{collect_tables, package_object, struct_bindings, table_metadata},
    code_file::{CodeFile, Section},
    naming,
};

/// Bindings for one package: embedded schema, struct bindings, table
/// metadata and the call-builder table.
pub struct PackageAbiTs<'a> {
    name: &'a str,
    package: &'a Package,
    abi_json: &'a str,
    generated_at: &'a str,
}

impl<'a> PackageAbiTs<'a> {
    /// `abi_json` is the module map serialized as pretty JSON.
    pub fn new(
        name: &'a str,
        package: &'a Package,
        abi_json: &'a str,
        generated_at: &'a str,
    ) -> Self {
        Self {
            name,
            package,
            abi_json,
            generated_at,
        }
    }

    fn struct_sections(&self) -> Vec<Section> {
        let bindings = struct_bindings(self.package);
        if bindings.is_empty() {
            return Vec::new();
        }

        vec![
            Section::new("Generated TypeScript interfaces")
                .items(bindings.iter().map(|b| b.interface())),
            Section::new("Generated type guards").items(bindings.iter().map(|b| b.guard())),
            Section::new("Generated parse functions").items(bindings.iter().map(|b| b.parse())),
        ]
    }

    fn package_id_section(&self) -> Section {
        let abi = naming::abi_const_name(self.name);

        Section::new("Extract packageId once at module level")
            .compact()
            .item(Const::new("packageId", format!("Object.values({})[0]?.address", abi)).private())
            .item(CodeFragment::block(
                "if (!packageId) {",
                vec![CodeFragment::line(format!(
                    "throw new Error(\"Package ID not found in {} ABI\");",
                    self.name
                ))],
                Some("}".to_string()),
            ))
    }
}

impl GeneratedFile for PackageAbiTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(naming::abi_file_name(self.name))
    }

    fn render(&self) -> String {
        let abi = naming::abi_const_name(self.name);
        let tables = collect_tables(self.package);

        let file = CodeFile::new()
            .header(super::header(
                format!("{} package ABI definition with TypeScript interfaces", self.name),
                self.generated_at,
            ))
            .import(
                Import::new("@mysten/sui/transactions")
                    .type_only()
                    .named("Transaction")
                    .named("TransactionArgument")
                    .named("TransactionResult"),
            )
            .add(Const::new(&abi, self.abi_json).as_const())
            .add(TypeAlias::new(
                naming::modules_type_name(self.name),
                format!("typeof {}", abi),
            ));

        self.struct_sections()
            .into_iter()
            .fold(file, CodeFile::add)
            .add_opt(table_metadata(self.name, &tables))
            .add(self.package_id_section())
            .add(
                Section::new("Type-safe method-chaining API")
                    .item(package_object(self.name, self.package)),
            )
            .render()
    }
}
