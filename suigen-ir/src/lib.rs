//! Schema model for Sui Move package interfaces.
//!
//! This crate provides the types the binding generator consumes. They are
//! deserialized directly from the JSON returned by
//! `getNormalizedMoveModulesByPackage` and are never mutated after loading.
//!
//! # Architecture
//!
//! ```text
//! snapshot (JSON) → suigen-manifest (loading) → suigen-ir (schema) → codegen
//! ```

mod package;
mod types;

pub use package::{
    Ability, AbilitySet, Field, Function, Module, ModuleId, Package, Parameter, Struct,
    StructTypeParameter, Visibility,
};
pub use types::{SchemaType, StructTag, same_address};
