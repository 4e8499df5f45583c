//! Go code generation for gofer.
//!
//! Renders the model, repository, service and handler files from the
//! contexts assembled by `gofer-model`, in gofmt layout.

mod code_builder;
pub mod files;
mod generator;
mod imports;
pub mod naming;
mod traits;
mod type_mapper;

pub use code_builder::CodeBuilder;
pub use files::render_func_params;
pub use generator::{Generator, HandlerGenerator, ModelScope};
pub use imports::GoImports;
pub use traits::{Codegen, GenerateResult, PreviewFile};
pub use type_mapper::{GoTypeMapper, TypeMapper};
