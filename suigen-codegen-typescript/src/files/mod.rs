//! TypeScript file generators.

mod abi_ts;
mod index_ts;

pub use abi_ts::PackageAbiTs;
pub use index_ts::IndexTs;

/// Tool name recorded in generated file headers.
pub(crate) const GENERATED_BY: &str = "suigen";

/// Header lines shared by every generated file.
pub(crate) fn header(title: String, generated_at: &str) -> Vec<String> {
    vec![
        title,
        "Auto-generated file - do not edit manually".to_string(),
        String::new(),
        format!("Generated by: {}", GENERATED_BY),
        format!("Generated at: {}", generated_at),
    ]
}
