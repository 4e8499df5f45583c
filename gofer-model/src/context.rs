//! Render contexts handed to the code generators.

use gofer_core::TypeSet;

use crate::{
    FieldSet, FieldSpec, HandlerIdentity, ModelIdentity, Result, field::ensure_unique,
    token::parse_fields,
};

/// Everything the model templates need, assembled once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    identity: ModelIdentity,
    fields: FieldSet,
}

impl RenderContext {
    pub fn new(identity: ModelIdentity, fields: FieldSet) -> Self {
        Self { identity, fields }
    }

    /// Run the whole pipeline: parse the field tokens, add the bookkeeping
    /// fields, then derive the model names.
    pub fn assemble<S: AsRef<str>>(model_name: &str, tokens: &[S], types: &TypeSet) -> Result<Self> {
        let declared = parse_fields(tokens, types)?;
        let fields = FieldSet::build(declared)?;
        let identity = ModelIdentity::new(model_name)?;
        Ok(Self::new(identity, fields))
    }

    pub fn identity(&self) -> &ModelIdentity {
        &self.identity
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// Caller supplied fields only
    pub fn declared_fields(&self) -> &[FieldSpec] {
        self.fields.declared()
    }

    /// Declared plus injected fields
    pub fn all_fields(&self) -> &[FieldSpec] {
        self.fields.all()
    }
}

/// Context for a standalone handler and its request arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerContext {
    identity: HandlerIdentity,
    arguments: Vec<FieldSpec>,
}

impl HandlerContext {
    pub fn assemble<S: AsRef<str>>(
        name: &str,
        package: &str,
        tokens: &[S],
        types: &TypeSet,
    ) -> Result<Self> {
        let identity = HandlerIdentity::new(name, package)?;
        let arguments = parse_fields(tokens, types)?;
        ensure_unique(&arguments)?;
        Ok(Self {
            identity,
            arguments,
        })
    }

    pub fn identity(&self) -> &HandlerIdentity {
        &self.identity
    }

    /// Request arguments, in input order
    pub fn arguments(&self) -> &[FieldSpec] {
        &self.arguments
    }
}
