//! Declarations synthesized from a package schema.
//!
//! Each submodule turns one aspect of a [`suigen_ir::Package`] into TypeScript
//! AST nodes; the file generators decide where they land.

mod calls;
mod structs;
mod tables;

pub use calls::{CallBinding, module_calls, package_object};
pub use structs::{StructBinding, struct_bindings};
pub use tables::{TableUsage, collect_tables, fetcher_type, table_metadata};
