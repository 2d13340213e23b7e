//! Generated identifier names.
//!
//! Every exported TypeScript name is derived here from schema names through
//! [`to_camel_case`] / [`to_pascal_case`], so the same schema name always
//! produces the same identifier.

use suigen_core::{to_camel_case, to_pascal_case};

/// `{Module}{Struct}Type`, e.g. `counter` + `Counter` -> `CounterCounterType`.
pub fn interface_name(module: &str, name: &str) -> String {
    format!("{}{}Type", to_pascal_case(module), to_pascal_case(name))
}

/// Type guard name: `is{Interface}`.
pub fn guard_name(module: &str, name: &str) -> String {
    format!("is{}", interface_name(module, name))
}

/// Parse function name: `parse{Interface}`.
pub fn parse_name(module: &str, name: &str) -> String {
    format!("parse{}", interface_name(module, name))
}

/// Embedded schema constant: `{package}Abi`.
pub fn abi_const_name(package: &str) -> String {
    format!("{}Abi", to_camel_case(package))
}

/// Type alias for the embedded schema: `{Package}Modules`.
pub fn modules_type_name(package: &str) -> String {
    format!("{}Modules", to_pascal_case(package))
}

/// Call-builder table: `{package}Package`.
pub fn package_const_name(package: &str) -> String {
    format!("{}Package", to_camel_case(package))
}

/// Caller-supplied table fetch capability: `{Package}TableContentsFetcher`.
pub fn fetcher_type_name(package: &str) -> String {
    format!("{}TableContentsFetcher", to_pascal_case(package))
}

/// Module specifier of a package's bindings, relative to the index.
pub fn abi_module_path(package: &str) -> String {
    format!("./{}.abi", package)
}

/// File name of a package's bindings.
pub fn abi_file_name(package: &str) -> String {
    format!("{}.abi.ts", package)
}
