//! The optional `gofer.toml` configuration file.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use gofer_core::TypeSet;
use serde::Deserialize;

use crate::{Error, Result};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "gofer.toml";

/// Root of `gofer.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GoferConfig {
    /// Settings for `model`, `gen` and `handler`
    pub generate: GenerateConfig,

    /// Settings for `project`
    pub project: ProjectConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// Field types accepted on the command line
    pub types: TypeSet,

    /// Refuse to generate unless the output folder looks like a Go project
    pub check_project_folder: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            types: TypeSet::all(),
            check_project_folder: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// GitHub `owner/repo` of the template project
    pub template: String,

    /// Identifier replaced by the project name across the clone
    pub placeholder: String,

    /// File name globs whose contents are rewritten
    pub patterns: Vec<String>,

    /// Required project name prefix
    pub prefix: String,

    /// Environment variable holding the GitHub token
    pub token_env: String,

    /// Example env file copied to `.env`
    pub env_example: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            template: "MihaiBlebea/go-template".to_string(),
            placeholder: "go-template".to_string(),
            patterns: vec!["*.go".to_string(), "*.mod".to_string()],
            prefix: "go-".to_string(),
            token_env: "GITHUB_TOKEN".to_string(),
            env_example: ".env.example".to_string(),
        }
    }
}

impl GoferConfig {
    /// Load `gofer.toml` from `dir`, falling back to defaults when absent.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILE);
        if path.is_file() {
            Self::open(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load an explicit configuration file; a missing file is an error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path: PathBuf = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse configuration content with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let config: GoferConfig =
            toml::from_str(content).map_err(|e| Error::config_parse(e, content, filename))?;
        config.validate(content, filename)?;
        Ok(config)
    }

    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        if self.generate.types.is_empty() {
            return Err(Error::config_invalid(
                "at least one field type must be allowed",
                src,
                filename,
                "types",
            ));
        }
        if self.project.placeholder.is_empty() {
            return Err(Error::config_invalid(
                "placeholder cannot be empty",
                src,
                filename,
                "placeholder",
            ));
        }
        if self.project.patterns.is_empty() {
            return Err(Error::config_invalid(
                "at least one file pattern is required",
                src,
                filename,
                "patterns",
            ));
        }
        Ok(())
    }
}

impl FromStr for GoferConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use gofer_core::FieldType;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = GoferConfig::from_str("").unwrap();
        assert_eq!(config.generate.types, TypeSet::all());
        assert!(config.generate.check_project_folder);
        assert_eq!(config.project.placeholder, "go-template");
        assert_eq!(config.project.patterns, ["*.go", "*.mod"]);
        assert_eq!(config.project.prefix, "go-");
    }

    #[test]
    fn test_custom_types() {
        let config = GoferConfig::from_str(
            r#"
            [generate]
            types = ["string", "int", "time.Time"]
            check_project_folder = false
            "#,
        )
        .unwrap();

        assert!(config.generate.types.contains(FieldType::Timestamp));
        assert!(!config.generate.types.contains(FieldType::Bool));
        assert!(!config.generate.check_project_folder);
    }

    #[test]
    fn test_project_section() {
        let config = GoferConfig::from_str(
            r#"
            [project]
            template = "acme/go-starter"
            placeholder = "go-starter"
            patterns = ["*.go", "*.mod", "Dockerfile"]
            "#,
        )
        .unwrap();

        assert_eq!(config.project.template, "acme/go-starter");
        assert_eq!(config.project.patterns.len(), 3);
        assert_eq!(config.project.token_env, "GITHUB_TOKEN");
    }

    #[test]
    fn test_unknown_type_is_parse_error() {
        let err = GoferConfig::from_str("[generate]\ntypes = [\"float\"]\n").unwrap_err();
        assert!(matches!(*err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = GoferConfig::from_str("[generate]\nmute = true\n").unwrap_err();
        assert!(matches!(*err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_empty_type_list_is_invalid() {
        let err = GoferConfig::from_str("[generate]\ntypes = []\n").unwrap_err();
        match *err {
            Error::ConfigInvalid { message, span, .. } => {
                assert!(message.contains("field type"));
                assert_eq!(span.map(|s| s.offset()), Some(11));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_discover_missing_file() {
        let temp = TempDir::new().unwrap();
        let config = GoferConfig::discover(temp.path()).unwrap();
        assert_eq!(config.project.template, "MihaiBlebea/go-template");
    }

    #[test]
    fn test_discover_reads_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILE),
            "[project]\nprefix = \"svc-\"\n",
        )
        .unwrap();

        let config = GoferConfig::discover(temp.path()).unwrap();
        assert_eq!(config.project.prefix, "svc-");
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = GoferConfig::open(temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
