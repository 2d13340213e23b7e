//! Metadata for keyed tables referenced by struct fields.
//!
//! Table contents live off-object on chain, so the generated interfaces only
//! carry a handle. This collector documents each distinct `Table<K, V>`
//! instantiation and declares the fetch capability the caller supplies.

use indexmap::IndexMap;
use suigen_codegen::{CodeFragment, TypeMapper};
use suigen_ir::{Package, SchemaType};

use crate::{
    ast::TypeAlias,
    code_file::Section,
    naming,
    type_mapper::{KnownStruct, TsType, TypeScriptTypeMapper},
};

/// First field that referenced a distinct table instantiation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableUsage {
    pub key: TsType,
    pub value: TsType,
    pub module: String,
    pub struct_name: String,
    pub field: String,
}

impl TableUsage {
    /// Dedup key built from the rendered key and value types.
    pub fn dedup_key(&self) -> String {
        format!("{}_{}", self.key, self.value)
    }

    /// Key type usable as a `Record` key.
    fn record_key(&self) -> TsType {
        match self.key {
            TsType::Uint8Array => TsType::String,
            ref key => key.clone(),
        }
    }

    fn doc(&self, fetcher: &str) -> CodeFragment {
        CodeFragment::doc_block([
            format!("Table<{}, {}> metadata", self.key, self.value),
            String::new(),
            format!("Base type: {}", TsType::IdHandle),
            format!("Resolved type: Record<{}, {}>", self.record_key(), self.value),
            format!(
                "First seen: {}::{}.{}",
                self.module, self.struct_name, self.field
            ),
            String::new(),
            "Usage:".to_string(),
            "1. Read the table handle from the base type".to_string(),
            format!("2. Fetch the table contents by handle with a {}", fetcher),
            "3. Merge the contents into the resolved type".to_string(),
            String::new(),
            "Example:".to_string(),
            format!("  const tableId = data.{}.id;", self.field),
            "  const contents = await fetchTableContents(tableId);".to_string(),
            format!("  const resolved = {{ ...data, {}: contents }};", self.field),
        ])
    }
}

/// Collect distinct table instantiations in first-seen order.
pub fn collect_tables(package: &Package) -> Vec<TableUsage> {
    let mut seen: IndexMap<String, TableUsage> = IndexMap::new();

    for (module, struct_name, def) in package.structs() {
        for field in &def.fields {
            let SchemaType::Struct(tag) = &field.ty else {
                continue;
            };
            let KnownStruct::Table { key, value } = KnownStruct::classify(tag) else {
                continue;
            };

            let usage = TableUsage {
                key: TypeScriptTypeMapper.map_type(key),
                value: TypeScriptTypeMapper.map_type(value),
                module: module.to_string(),
                struct_name: struct_name.to_string(),
                field: field.name.clone(),
            };
            seen.entry(usage.dedup_key()).or_insert(usage);
        }
    }

    seen.into_values().collect()
}

/// `export type {Package}TableContentsFetcher = (tableId: string) => Promise<unknown>;`
pub fn fetcher_type(package: &str) -> TypeAlias {
    TypeAlias::new(
        naming::fetcher_type_name(package),
        "(tableId: string) => Promise<unknown>",
    )
    .doc("Fetches the contents of an on-chain table by its handle")
}

/// The table metadata section, or `None` when no field references a table.
pub fn table_metadata(package_name: &str, tables: &[TableUsage]) -> Option<Section> {
    if tables.is_empty() {
        return None;
    }

    let fetcher = naming::fetcher_type_name(package_name);
    let section = tables
        .iter()
        .fold(Section::new("Table types metadata"), |section, usage| {
            section.item(usage.doc(&fetcher))
        })
        .item(fetcher_type(package_name));

    Some(section)
}
