//! Naming policy for models, handlers and projects.

use std::path::{Path, PathBuf};

use gofer_core::{exported_name, title_case};

use crate::{Error, Result};

/// Suffix appended to the model name to form the repository type name.
pub const REPO_SUFFIX: &str = "Repo";

/// Names derived from the model name argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelIdentity {
    package_name: String,
    model_name: String,
    repo_name: String,
    model_var_name: String,
    repo_var_name: String,
}

impl ModelIdentity {
    /// Validate the model name and derive every name from it.
    ///
    /// The name must be non-blank, must not start with an uppercase letter
    /// and must not contain whitespace.
    pub fn new(name: &str) -> Result<Self> {
        validate_model_name(name)?;

        let lower = name.to_lowercase();
        let model_name = title_case(name);

        Ok(Self {
            repo_name: format!("{}{}", model_name, REPO_SUFFIX),
            repo_var_name: format!("{}{}", lower, REPO_SUFFIX),
            package_name: lower.clone(),
            model_var_name: lower,
            model_name,
        })
    }

    /// Go package (and folder) name, e.g. `user`
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Exported model type, e.g. `User`
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Repository type, e.g. `UserRepo`
    pub fn repo_name(&self) -> &str {
        &self.repo_name
    }

    pub fn model_var_name(&self) -> &str {
        &self.model_var_name
    }

    pub fn repo_var_name(&self) -> &str {
        &self.repo_var_name
    }
}

fn validate_model_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::empty_name("model"));
    }

    if name.starts_with(|c: char| c.is_ascii_uppercase()) {
        return Err(Box::new(Error::NotLowercase {
            name: name.to_string(),
            suggestion: name.to_lowercase(),
        }));
    }

    if name.contains(char::is_whitespace) {
        return Err(Box::new(Error::ContainsWhitespace {
            name: name.to_string(),
        }));
    }

    Ok(())
}

/// Names derived for a standalone handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerIdentity {
    file_stem: String,
    handler_name: String,
    package_name: String,
}

impl HandlerIdentity {
    pub fn new(name: &str, package: &str) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(Error::empty_name("handler"));
        }
        if package.trim().is_empty() {
            return Err(Error::empty_name("package"));
        }

        Ok(Self {
            file_stem: name.to_string(),
            handler_name: exported_name(name),
            package_name: package.to_lowercase(),
        })
    }

    /// File name without the `_handler.go` suffix
    pub fn file_stem(&self) -> &str {
        &self.file_stem
    }

    /// Exported handler name, e.g. `CreateUser`
    pub fn handler_name(&self) -> &str {
        &self.handler_name
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }
}

/// A validated name for a new project folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate `name` against the required prefix (e.g. `go-`).
    pub fn new(name: &str, prefix: &str) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(Error::empty_name("project"));
        }

        if name.contains(char::is_whitespace) {
            return Err(Error::invalid_project_name(
                name,
                "project name should not contain whitespace",
            ));
        }

        if !name.starts_with(prefix) || name.len() == prefix.len() {
            return Err(Error::invalid_project_name(
                name,
                format!("project name must start with '{prefix}', e.g. '{prefix}casino'"),
            ));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Folder the project is created in under `parent`, which must not exist yet.
    pub fn target_dir(&self, parent: &Path) -> Result<PathBuf> {
        let dir = parent.join(&self.0);
        if dir.exists() {
            return Err(Error::invalid_project_name(
                &self.0,
                format!("folder {} already exists", self.0),
            ));
        }
        Ok(dir)
    }
}
