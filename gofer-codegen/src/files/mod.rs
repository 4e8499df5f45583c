//! The Go source files gofer renders.

mod handler_go;
mod model_go;
mod repo_go;
mod service_go;

pub use handler_go::HandlerGo;
pub use model_go::ModelGo;
pub use repo_go::RepoGo;
pub use service_go::ServiceGo;

use gofer_model::FieldSpec;

use crate::{GoImports, GoTypeMapper, TypeMapper, naming::safe_name};

/// Render `paramName goType` pairs separated by commas, for use in a Go
/// function signature.
pub fn render_func_params(fields: &[FieldSpec]) -> String {
    render_params_avoiding(fields, &[])
}

/// Like [`render_func_params`], escaping any parameter named in `taken`.
pub(crate) fn render_params_avoiding(fields: &[FieldSpec], taken: &[&str]) -> String {
    fields
        .iter()
        .map(|f| {
            format!(
                "{} {}",
                param_ident(f, taken),
                GoTypeMapper.map_field_type(f.field_type())
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parameter names separated by commas, for use in a call expression.
pub(crate) fn render_call_args(fields: &[FieldSpec], taken: &[&str]) -> String {
    fields
        .iter()
        .map(|f| param_ident(f, taken))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The Go identifier for a field's parameter.
///
/// Keywords and names already bound in the enclosing function (`taken`) get
/// a leading underscore. Parameter names never contain `_`, so the escaped
/// form cannot clash with another field.
pub(crate) fn param_ident(field: &FieldSpec, taken: &[&str]) -> String {
    let name = safe_name(field.param_name());
    if taken.contains(&name.as_str()) {
        format!("_{}", name)
    } else {
        name
    }
}

/// Struct field rows: exported name, Go type and JSON tag.
pub(crate) fn struct_rows(fields: &[FieldSpec]) -> Vec<Vec<String>> {
    fields
        .iter()
        .map(|f| {
            vec![
                f.exported_name().to_string(),
                GoTypeMapper.map_field_type(f.field_type()).to_string(),
                format!("`json:\"{}\"`", f.raw_name()),
            ]
        })
        .collect()
}

/// Imports needed by the Go types of `fields`.
pub(crate) fn type_imports(fields: &[FieldSpec], mut imports: GoImports) -> GoImports {
    for path in fields
        .iter()
        .filter_map(|f| GoTypeMapper.import_for(f.field_type()))
    {
        imports.add(path);
    }
    imports
}
