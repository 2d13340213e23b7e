//! Core utilities and types for the suigen binding generator.
//!
//! This crate provides the naming rule shared by every synthesizer and the
//! file-writing primitives used by the output layer.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::{capitalize, to_camel_case, to_pascal_case};
