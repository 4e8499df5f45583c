//! Generator traits and result types.

use std::path::{Path, PathBuf};

use eyre::Result;
use gofer_core::GeneratedFile;
use tracing::debug;

/// A set of Go files rendered from one command invocation.
pub trait Codegen {
    /// The files this generator produces, in output order
    fn files(&self) -> Vec<Box<dyn GeneratedFile + '_>>;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .iter()
            .map(|file| PreviewFile {
                path: file.path(Path::new("")).display().to_string(),
                content: file.render(),
            })
            .collect()
    }

    /// Write all files under `output_dir`, overwriting existing ones
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();
        for file in self.files() {
            let path = file.write(output_dir)?;
            debug!(path = %path.display(), "wrote file");
            result.written.push(path);
        }
        Ok(result)
    }
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files written, in output order
    pub written: Vec<PathBuf>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
