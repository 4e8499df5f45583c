use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for gofer-model operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid argument format for '{token}'")]
    #[diagnostic(
        code(gofer::malformed_argument),
        help("fields are written as name:type, e.g. user_name:string")
    )]
    MalformedArgument {
        #[source_code]
        src: NamedSource<String>,
        #[label("missing ':' separator")]
        span: SourceSpan,
        token: String,
    },

    #[error("unsupported field type '{ty}'")]
    #[diagnostic(code(gofer::unsupported_type), help("valid types are: {allowed}"))]
    UnsupportedType {
        #[source_code]
        src: NamedSource<String>,
        #[label("unsupported type in '{token}'")]
        span: SourceSpan,
        token: String,
        ty: String,
        allowed: String,
    },

    #[error("duplicate field '{name}'")]
    #[diagnostic(
        code(gofer::duplicate_field),
        help("each field name may appear once; 'id', 'created' and 'updated' are added automatically")
    )]
    DuplicateField { name: String },

    #[error("fields '{first}' and '{second}' both render as '{rendered}'")]
    #[diagnostic(
        code(gofer::name_clash),
        help("rename one of them so the generated Go identifiers differ")
    )]
    NameClash {
        first: String,
        second: String,
        rendered: String,
    },

    #[error("{kind} name must be supplied")]
    #[diagnostic(code(gofer::empty_name))]
    EmptyName { kind: &'static str },

    #[error("model name must be lowercase: '{name}'")]
    #[diagnostic(code(gofer::not_lowercase), help("try '{suggestion}'"))]
    NotLowercase { name: String, suggestion: String },

    #[error("model name should not contain whitespace: '{name}'")]
    #[diagnostic(
        code(gofer::contains_whitespace),
        help("use underscores or a single word, e.g. 'user'")
    )]
    ContainsWhitespace { name: String },

    #[error("invalid project name '{name}'")]
    #[diagnostic(code(gofer::invalid_project_name), help("{reason}"))]
    InvalidProjectName { name: String, reason: String },

    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(gofer::config_parse))]
    ConfigParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        filename: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(gofer::config_invalid))]
    ConfigInvalid {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Create a config parse error from a toml error with source context
    pub fn config_parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ConfigParse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            filename: filename.to_string(),
            source,
        })
    }

    /// Create a config validation error, pointing at `needle` when it occurs in the source
    pub fn config_invalid(
        message: impl Into<String>,
        src: &str,
        filename: &str,
        needle: &str,
    ) -> Box<Self> {
        let span = src
            .find(needle)
            .map(|pos| SourceSpan::from((pos, needle.len())));
        Box::new(Error::ConfigInvalid {
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: message.into(),
        })
    }

    pub(crate) fn name_clash(first: &str, second: &str, rendered: &str) -> Box<Self> {
        Box::new(Error::NameClash {
            first: first.to_string(),
            second: second.to_string(),
            rendered: rendered.to_string(),
        })
    }

    pub(crate) fn empty_name(kind: &'static str) -> Box<Self> {
        Box::new(Error::EmptyName { kind })
    }

    pub(crate) fn invalid_project_name(
        name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::InvalidProjectName {
            name: name.into(),
            reason: reason.into(),
        })
    }
}
