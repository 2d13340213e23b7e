//! Core operations.
//!
//! This module contains the business logic for suigen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod list;
pub mod load;

pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use list::list;
pub use load::load_packages;
