//! Checks on the folder gofer is asked to write into.

use std::path::Path;

use eyre::{Context, Result, bail};

/// Marker the output folder name must contain to count as a Go project.
const GO_MARKER: &str = "go";

/// Fail unless the folder name of `dir` contains "go", e.g. `go-casino`.
pub fn ensure_go_project(dir: &Path) -> Result<()> {
    let dir = dir
        .canonicalize()
        .wrap_err_with(|| format!("Failed to resolve '{}'", dir.display()))?;
    let name = dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    if !name.contains(GO_MARKER) {
        bail!("run this command only in a go project folder, e.g. go-casino");
    }
    Ok(())
}
