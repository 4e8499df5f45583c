//! Project operation - clone the template repository and rename it.

use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use eyre::{Context, Result, bail};
use globset::{Glob, GlobSet, GlobSetBuilder};
use gofer_core::File;
use gofer_model::{ProjectConfig, ProjectName};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::reports::ProjectReport;

/// Options for the scaffold operation.
pub struct ScaffoldOptions<'a> {
    /// Validated project name.
    pub project: &'a ProjectName,
    /// Folder the template is cloned into; must not exist.
    pub target: &'a Path,
    /// Template repository, placeholder and file patterns.
    pub settings: &'a ProjectConfig,
    /// GitHub token used for the clone.
    pub token: &'a str,
    /// Silence git progress output.
    pub quiet: bool,
}

/// Execute the scaffold operation.
pub fn scaffold(opts: ScaffoldOptions) -> Result<ProjectReport> {
    clone_template(&opts.settings.template, opts.token, opts.target, opts.quiet)?;

    let updated = substitute_placeholder(
        opts.target,
        &opts.settings.placeholder,
        opts.project.as_str(),
        &opts.settings.patterns,
    )?;
    let env_promoted = promote_env_file(opts.target, &opts.settings.env_example)?;

    info!(
        project = opts.project.as_str(),
        updated = updated.len(),
        "project created"
    );

    Ok(ProjectReport {
        project: opts.project.as_str().to_string(),
        updated,
        env_promoted,
    })
}

/// Clone `owner/repo` from GitHub into `target` with an external `git` process.
pub fn clone_template(template: &str, token: &str, target: &Path, quiet: bool) -> Result<()> {
    // The URL embeds the token, so only the template name is logged.
    debug!(template, target = %target.display(), "cloning template");

    let mut git = Command::new("git");
    git.arg("clone");
    if quiet {
        git.arg("--quiet");
    }
    let status = git
        .arg(format!("https://{}@github.com/{}.git", token, template))
        .arg(target)
        .status()
        .wrap_err("Failed to run git")?;

    if !status.success() {
        bail!("git clone of {} failed ({})", template, status);
    }
    Ok(())
}

/// Replace every occurrence of `placeholder` with `replacement` in the files
/// under `root` whose name matches one of `patterns`.
///
/// The `.git` directory is never visited. Returns the files whose content
/// changed, in walk order.
pub fn substitute_placeholder(
    root: &Path,
    placeholder: &str,
    replacement: &str,
    patterns: &[String],
) -> Result<Vec<PathBuf>> {
    let globs = build_glob_set(patterns)?;
    let mut updated = Vec::new();

    let entries = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.file_name() != ".git");

    for entry in entries {
        let entry = entry.wrap_err_with(|| format!("Failed to walk '{}'", root.display()))?;
        if !entry.file_type().is_file() || !globs.is_match(entry.file_name()) {
            continue;
        }

        let path = entry.path();
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read '{}'", path.display()))?;
        if !content.contains(placeholder) {
            continue;
        }

        File::new(path, content.replace(placeholder, replacement)).write()?;
        debug!(path = %path.display(), "replaced placeholder");
        updated.push(path.to_path_buf());
    }

    Ok(updated)
}

/// Copy `example` (e.g. `.env.example`) to `.env` and remove the example.
///
/// Returns `false` when the template has no example file.
pub fn promote_env_file(root: &Path, example: &str) -> Result<bool> {
    let example = root.join(example);
    if !example.is_file() {
        debug!(path = %example.display(), "no env example to promote");
        return Ok(false);
    }

    let content = fs::read_to_string(&example)
        .wrap_err_with(|| format!("Failed to read '{}'", example.display()))?;
    File::new(root.join(".env"), content).write()?;
    fs::remove_file(&example)
        .wrap_err_with(|| format!("Failed to remove '{}'", example.display()))?;
    Ok(true)
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob =
            Glob::new(pattern).wrap_err_with(|| format!("Invalid file pattern '{}'", pattern))?;
        builder.add(glob);
    }
    builder.build().wrap_err("Failed to build file patterns")
}
