//! TypeScript binding generator for Sui Move packages.
//!
//! Given the normalized schema of one or more packages, this crate produces a
//! typed client surface per package:
//!
//! - one `interface` per struct, with a runtime type guard and a parse function
//! - metadata for every distinct keyed-table instantiation
//! - a call-builder table with one method per exposed function
//!
//! plus an `index.ts` that re-exports every package.
//!
//! ```ignore
//! use suigen_codegen::LanguageCodegen;
//! use suigen_codegen_typescript::Generator;
//! use std::path::Path;
//!
//! let generator = Generator::new([("counter".to_string(), package)])?;
//!
//! // Preview files without writing
//! let files = generator.preview();
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("src/abi"))?;
//! ```

mod code_file;
mod generator;
mod type_mapper;

pub mod ast;
pub mod bindings;
pub mod files;
pub mod naming;

pub use code_file::{CodeFile, Section};
pub use generator::Generator;
pub use suigen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use type_mapper::{KnownStruct, TsType, TypeScriptTypeMapper, is_implicit_parameter};
