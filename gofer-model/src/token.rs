//! Parsing of `name:type` command arguments.

use std::str::FromStr;

use gofer_core::{FieldType, TypeSet};
use miette::{NamedSource, SourceSpan};

use crate::{Error, FieldSpec, Result};

/// Parse every token, failing on the first malformed or unsupported one.
///
/// Each token is split on its first `:`. The type tag must be a member of
/// `types`; a token such as `a:b:c` therefore fails with an unsupported
/// type of `b:c`.
pub fn parse_fields<S: AsRef<str>>(tokens: &[S], types: &TypeSet) -> Result<Vec<FieldSpec>> {
    let line = ArgLine::new(tokens, types);

    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            parse_token(token.as_ref(), types).map_err(|fault| line.error(index, fault))
        })
        .collect()
}

enum Fault<'a> {
    Malformed,
    Unsupported { name_len: usize, ty: &'a str },
}

fn parse_token<'a>(token: &'a str, types: &TypeSet) -> std::result::Result<FieldSpec, Fault<'a>> {
    let (name, ty) = token.split_once(':').ok_or(Fault::Malformed)?;

    let unsupported = || Fault::Unsupported {
        name_len: name.len(),
        ty,
    };
    let field_type = FieldType::from_str(ty).map_err(|_| unsupported())?;
    if !types.contains(field_type) {
        return Err(unsupported());
    }

    Ok(FieldSpec::new(name, field_type))
}

/// The argument list rendered as one line, so errors can point at a token.
struct ArgLine {
    src: String,
    tokens: Vec<(usize, String)>,
    allowed: String,
}

impl ArgLine {
    fn new<S: AsRef<str>>(tokens: &[S], types: &TypeSet) -> Self {
        let mut src = String::new();
        let mut offsets = Vec::with_capacity(tokens.len());
        for token in tokens {
            if !src.is_empty() {
                src.push(' ');
            }
            offsets.push((src.len(), token.as_ref().to_string()));
            src.push_str(token.as_ref());
        }
        Self {
            src,
            tokens: offsets,
            allowed: types.names(),
        }
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new("arguments", self.src.clone())
    }

    fn error(&self, index: usize, fault: Fault<'_>) -> Box<Error> {
        let (offset, token) = &self.tokens[index];
        match fault {
            Fault::Malformed => Box::new(Error::MalformedArgument {
                src: self.named_source(),
                span: SourceSpan::from((*offset, token.len())),
                token: token.clone(),
            }),
            Fault::Unsupported { name_len, ty } => Box::new(Error::UnsupportedType {
                src: self.named_source(),
                span: SourceSpan::from((offset + name_len + 1, ty.len())),
                token: token.clone(),
                ty: ty.to_string(),
                allowed: self.allowed.clone(),
            }),
        }
    }
}
