//! Generate command report data structures.

use std::path::PathBuf;

use gofer_codegen::PreviewFile;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(Vec<PathBuf>),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(paths) => {
                out.section("Generated");
                for path in paths {
                    out.added_item(&path.display().to_string());
                }
            }
            GenerationResult::Preview(files) => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }

                out.divider("Summary");
                out.preformatted(&format!("{} files would be generated", files.len()));
            }
        }
    }
}
