//! Core operations.
//!
//! This module contains the business logic for gofer commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod project;
pub mod workspace;

pub use generate::generate;
pub use project::scaffold;
pub use workspace::ensure_go_project;
