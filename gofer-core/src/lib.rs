//! Core utilities and types for the gofer scaffolding tool.
//!
//! This crate provides the pieces shared by every other gofer crate:
//! the field type tags, the identifier casing rules, and generated
//! file handling.

mod file;
mod types;
mod utils;

// File operations
pub use file::{File, GeneratedFile};
// Field type tags
pub use types::{FieldType, TypeSet};
// Identifier casing
pub use utils::{ACRONYM_THRESHOLD, exported_name, param_name, title_case};
