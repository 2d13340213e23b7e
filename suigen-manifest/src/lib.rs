//! Configuration and schema loading for suigen.
//!
//! - [`Manifest`] is the parsed `suigen.toml`; errors are [`miette`] diagnostics
//!   pointing into the file.
//! - [`SchemaSource`] turns a configured package into a [`suigen_ir::Package`];
//!   [`SnapshotDir`] reads JSON snapshots from disk.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod schema;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    GeneratorConfig, Manifest, NetworkConfig, PackageConfig, PackageEntry, ParseContext,
    SuigenToml,
};
pub use schema::{SchemaSource, SnapshotDir, parse_snapshot};
