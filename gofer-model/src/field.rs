//! Field descriptions derived from `name:type` arguments.

use std::collections::{HashMap, HashSet};

use gofer_core::{FieldType, TypeSet, exported_name, param_name};

use crate::{Error, Result, token::parse_fields};

/// Bookkeeping fields appended to every model, in order.
pub const INJECTED_FIELDS: [&str; 3] = ["id:int", "created:timestamp", "updated:timestamp"];

/// A single model field.
///
/// The exported and parameter names are derived from the raw name when the
/// field is created and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    raw_name: String,
    field_type: FieldType,
    exported_name: String,
    param_name: String,
}

impl FieldSpec {
    pub fn new(raw_name: impl Into<String>, field_type: FieldType) -> Self {
        let raw_name = raw_name.into();
        Self {
            exported_name: exported_name(&raw_name),
            param_name: param_name(&raw_name),
            raw_name,
            field_type,
        }
    }

    /// The snake_case name as supplied (also used as the JSON key)
    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Title-case, acronym-aware name (e.g., `UserName`, `DBID`)
    pub fn exported_name(&self) -> &str {
        &self.exported_name
    }

    /// Lower-camel, acronym-aware name (e.g., `userName`, `dbID`)
    pub fn param_name(&self) -> &str {
        &self.param_name
    }
}

/// Ordered model fields: declared fields first, then the injected ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    fields: Vec<FieldSpec>,
    declared: usize,
}

impl FieldSet {
    /// Append the [`INJECTED_FIELDS`] to the declared fields.
    ///
    /// Injected fields go through the same parser as user input, against the
    /// full type set. Two fields may not share a raw name, nor render to the
    /// same Go identifier.
    pub fn build(declared: Vec<FieldSpec>) -> Result<Self> {
        let injected = parse_fields(&INJECTED_FIELDS, &TypeSet::all())?;
        ensure_unique(declared.iter().chain(&injected))?;

        let count = declared.len();
        let mut fields = declared;
        fields.extend(injected);

        Ok(Self {
            fields,
            declared: count,
        })
    }

    /// Fields supplied by the caller, in input order
    pub fn declared(&self) -> &[FieldSpec] {
        &self.fields[..self.declared]
    }

    /// The bookkeeping fields (`id`, `created`, `updated`)
    pub fn injected(&self) -> &[FieldSpec] {
        &self.fields[self.declared..]
    }

    /// Declared followed by injected fields
    pub fn all(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Reject the first field whose raw, exported or parameter name was already
/// taken by an earlier field.
pub(crate) fn ensure_unique<'a>(fields: impl IntoIterator<Item = &'a FieldSpec>) -> Result<()> {
    let mut raw = HashSet::new();
    let mut exported = HashMap::new();
    let mut params = HashMap::new();

    for field in fields {
        if !raw.insert(field.raw_name()) {
            return Err(Box::new(Error::DuplicateField {
                name: field.raw_name().to_string(),
            }));
        }
        if let Some(first) = exported.insert(field.exported_name(), field.raw_name()) {
            return Err(Error::name_clash(first, field.raw_name(), field.exported_name()));
        }
        if let Some(first) = params.insert(field.param_name(), field.raw_name()) {
            return Err(Error::name_clash(first, field.raw_name(), field.param_name()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declared(names: &[(&str, FieldType)]) -> Vec<FieldSpec> {
        names
            .iter()
            .map(|(name, ty)| FieldSpec::new(*name, *ty))
            .collect()
    }

    #[test]
    fn test_field_spec_names() {
        let field = FieldSpec::new("db_id", FieldType::Int);
        assert_eq!(field.raw_name(), "db_id");
        assert_eq!(field.exported_name(), "DBID");
        assert_eq!(field.param_name(), "dbID");
        assert_eq!(field.field_type(), FieldType::Int);
    }

    #[test]
    fn test_build_appends_injected_fields() {
        let set = FieldSet::build(declared(&[
            ("user_name", FieldType::String),
            ("age", FieldType::Int),
        ]))
        .unwrap();

        assert_eq!(set.len(), 5);
        assert_eq!(set.declared().len(), 2);
        let raw: Vec<_> = set.all().iter().map(|f| f.raw_name()).collect();
        assert_eq!(raw, ["user_name", "age", "id", "created", "updated"]);

        let injected = set.injected();
        assert_eq!(injected[0].exported_name(), "ID");
        assert_eq!(injected[0].field_type(), FieldType::Int);
        assert_eq!(injected[1].field_type(), FieldType::Timestamp);
        assert_eq!(injected[2].exported_name(), "Updated");
    }

    #[test]
    fn test_build_without_declared_fields() {
        let set = FieldSet::build(Vec::new()).unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.declared().is_empty());
        assert!(!set.is_empty());
    }

    #[test]
    fn test_build_rejects_injected_name() {
        let err = FieldSet::build(declared(&[("id", FieldType::String)])).unwrap_err();
        assert!(matches!(*err, Error::DuplicateField { ref name } if name == "id"));
    }

    #[test]
    fn test_build_rejects_repeated_declared_name() {
        let err = FieldSet::build(declared(&[
            ("name", FieldType::String),
            ("name", FieldType::Int),
        ]))
        .unwrap_err();
        assert!(matches!(*err, Error::DuplicateField { ref name } if name == "name"));
    }

    #[test]
    fn test_build_rejects_exported_name_clash_with_injected() {
        let err = FieldSet::build(declared(&[("i_d", FieldType::Int)])).unwrap_err();
        match *err {
            Error::NameClash {
                first,
                second,
                rendered,
            } => {
                assert_eq!(first, "i_d");
                assert_eq!(second, "id");
                assert_eq!(rendered, "ID");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_build_rejects_declared_names_rendering_alike() {
        let err = FieldSet::build(declared(&[
            ("user_name", FieldType::String),
            ("user__name", FieldType::String),
        ]))
        .unwrap_err();
        assert!(matches!(*err, Error::NameClash { ref rendered, .. } if rendered == "UserName"));

        // `Abc` and `aBc` export differently but share the parameter `abc`
        let err = FieldSet::build(declared(&[
            ("Abc", FieldType::Int),
            ("aBc", FieldType::Int),
        ]))
        .unwrap_err();
        assert!(matches!(*err, Error::NameClash { ref rendered, .. } if rendered == "abc"));
    }
}
