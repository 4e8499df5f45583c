//! End-to-end tests of the argument-to-context pipeline.

use gofer_model::{
    Error, FieldType, GoferConfig, RenderContext, TypeSet, parse_fields,
};
use miette::Diagnostic;

fn names(ctx: &RenderContext) -> Vec<(&str, &str, FieldType)> {
    ctx.all_fields()
        .iter()
        .map(|f| (f.exported_name(), f.param_name(), f.field_type()))
        .collect()
}

#[test]
fn test_user_model_context() {
    let ctx = RenderContext::assemble(
        "user",
        &["user_name:string", "is_active:bool"],
        &TypeSet::all(),
    )
    .unwrap();

    assert_eq!(
        names(&ctx),
        [
            ("UserName", "userName", FieldType::String),
            ("ISActive", "isActive", FieldType::Bool),
            ("ID", "id", FieldType::Int),
            ("Created", "created", FieldType::Timestamp),
            ("Updated", "updated", FieldType::Timestamp),
        ]
    );
    assert_eq!(ctx.declared_fields().len(), 2);

    let identity = ctx.identity();
    assert_eq!(identity.package_name(), "user");
    assert_eq!(identity.model_name(), "User");
    assert_eq!(identity.repo_name(), "UserRepo");
}

#[test]
fn test_acronym_field() {
    let ctx = RenderContext::assemble("account", &["db_id:int"], &TypeSet::all()).unwrap();
    let field = &ctx.declared_fields()[0];

    assert_eq!(field.exported_name(), "DBID");
    assert_eq!(field.param_name(), "dbID");
    assert_eq!(field.raw_name(), "db_id");
}

#[test]
fn test_injected_fields_close_the_set() {
    for tokens in [vec![], vec!["a:int"], vec!["a:int", "b:string", "c:bool"]] {
        let ctx = RenderContext::assemble("thing", &tokens, &TypeSet::all()).unwrap();
        let raw: Vec<&str> = ctx.all_fields().iter().map(|f| f.raw_name()).collect();

        assert_eq!(raw.len(), tokens.len() + 3);
        assert_eq!(&raw[tokens.len()..], ["id", "created", "updated"]);
    }
}

#[test]
fn test_malformed_argument_points_at_token() {
    let err = parse_fields(&["name:string", "age"], &TypeSet::all()).unwrap_err();

    assert_eq!(err.to_string(), "invalid argument format for 'age'");
    let label = err.labels().unwrap().next().unwrap();
    assert_eq!(label.offset(), "name:string ".len());
    assert_eq!(label.len(), "age".len());
}

#[test]
fn test_configured_allow_list() {
    let config: GoferConfig = "[generate]\ntypes = [\"string\", \"int\"]\n".parse().unwrap();

    let err =
        RenderContext::assemble("user", &["active:bool"], &config.generate.types).unwrap_err();
    match *err {
        Error::UnsupportedType { ty, allowed, .. } => {
            assert_eq!(ty, "bool");
            assert_eq!(allowed, "string, int");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_field_errors_come_before_name_errors() {
    let err = RenderContext::assemble("User", &["age"], &TypeSet::all()).unwrap_err();
    assert!(matches!(*err, Error::MalformedArgument { .. }));
}

#[test]
fn test_model_name_policy() {
    let tokens: [&str; 0] = [];
    assert!(RenderContext::assemble("user", &tokens, &TypeSet::all()).is_ok());
    assert!(matches!(
        *RenderContext::assemble("User", &tokens, &TypeSet::all()).unwrap_err(),
        Error::NotLowercase { .. }
    ));
    assert!(matches!(
        *RenderContext::assemble("user name", &tokens, &TypeSet::all()).unwrap_err(),
        Error::ContainsWhitespace { .. }
    ));
}

#[test]
fn test_fields_rendering_to_the_same_identifier_are_rejected() {
    let err = RenderContext::assemble("user", &["i_d:int"], &TypeSet::all()).unwrap_err();

    assert_eq!(
        err.to_string(),
        "fields 'i_d' and 'id' both render as 'ID'"
    );
}
