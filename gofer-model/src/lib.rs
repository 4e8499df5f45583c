//! Turns raw command arguments into the data the Go generators render.
//!
//! The pipeline is linear: `name:type` tokens are parsed into
//! [`FieldSpec`]s, the bookkeeping fields are appended by [`FieldSet`],
//! the model name is validated into a [`ModelIdentity`], and everything is
//! packaged as a [`RenderContext`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod context;
mod error;
mod field;
mod identity;
mod token;

pub use config::{CONFIG_FILE, GenerateConfig, GoferConfig, ProjectConfig};
pub use context::{HandlerContext, RenderContext};
pub use error::{Error, Result};
pub use field::{FieldSet, FieldSpec, INJECTED_FIELDS};
pub use gofer_core::{FieldType, TypeSet};
pub use identity::{HandlerIdentity, ModelIdentity, ProjectName, REPO_SUFFIX};
pub use token::parse_fields;
