use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, replacing any previous content.
    ///
    /// Returns the path that was written.
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        write_file(&path, &self.render())?;
        Ok(path)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("Failed to write '{}'", path.display()))?;
    Ok(())
}

/// A file with already-known content
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Write the file, creating parent directories as needed
    pub fn write(&self) -> Result<()> {
        write_file(&self.path, &self.content)
    }
}
