//! TypeScript AST builders for generating types, functions, imports, and exports.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod consts;
mod exports;
mod fns;
mod imports;
mod interface;
mod objects;
mod types;

pub use consts::Const;
pub use exports::Export;
pub use fns::{Fn, Param};
pub use imports::Import;
pub use interface::{Interface, InterfaceField};
pub use objects::{JsObject, Method, Property, PropertyValue};
pub use types::TypeAlias;
