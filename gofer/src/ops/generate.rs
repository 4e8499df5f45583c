//! Generate operation - render Go files and write or preview them.

use std::path::Path;

use eyre::{Context, Result};
use gofer_codegen::Codegen;
use tracing::info;

use crate::reports::{GenerateReport, GenerationResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output directory for generated code.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(generator: &impl Codegen, opts: GenerateOptions) -> Result<GenerateReport> {
    let result = if opts.dry_run {
        GenerationResult::Preview(generator.preview())
    } else {
        let generated = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;
        info!(
            count = generated.written.len(),
            output = %opts.output_dir.display(),
            "generated Go files"
        );
        GenerationResult::Written(generated.written)
    };

    Ok(GenerateReport { result })
}
