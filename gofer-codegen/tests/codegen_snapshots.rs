//! Snapshot tests for Go code generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use gofer_codegen::{Codegen, Generator, HandlerGenerator, ModelScope};
use gofer_model::{HandlerContext, RenderContext, TypeSet};

/// Preview a model package and return files sorted by path.
fn generate_model(name: &str, tokens: &[&str], scope: ModelScope) -> Vec<(String, String)> {
    let ctx = RenderContext::assemble(name, tokens, &TypeSet::all()).expect("invalid model");
    let mut files: Vec<(String, String)> = Generator::new(&ctx, scope)
        .preview()
        .into_iter()
        .map(|f| (f.path, f.content))
        .collect();
    files.sort_by(|a, b| a.0.cmp(&b.0));
    files
}

/// Get a specific file from the generated output.
fn get_file<'a>(files: &'a [(String, String)], path: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
}

const USER_FIELDS: &[&str] = &["name:string", "age:int", "is_active:bool"];

#[test]
fn test_model_struct_and_constructor() {
    let files = generate_model("user", USER_FIELDS, ModelScope::ModelAndRepo);
    let model = get_file(&files, "user/user.go").expect("user.go not found");
    insta::assert_snapshot!("model_user", model);
}

#[test]
fn test_repository() {
    let files = generate_model("user", USER_FIELDS, ModelScope::ModelAndRepo);
    let repo = get_file(&files, "user/repo.go").expect("repo.go not found");
    insta::assert_snapshot!("repo_user", repo);
}

#[test]
fn test_service() {
    let files = generate_model("user", USER_FIELDS, ModelScope::WithService);
    let service = get_file(&files, "user/service.go").expect("service.go not found");
    insta::assert_snapshot!("service_user", service);
}

#[test]
fn test_model_scope_has_no_service() {
    let files = generate_model("user", USER_FIELDS, ModelScope::ModelAndRepo);
    assert!(get_file(&files, "user/service.go").is_none());
}

#[test]
fn test_handler() {
    let ctx = HandlerContext::assemble(
        "create_user",
        "api",
        &["user_name:string", "db_id:int", "at:timestamp"],
        &TypeSet::all(),
    )
    .expect("invalid handler");
    let files = HandlerGenerator::new(&ctx).preview();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, "create_user_handler.go");
    insta::assert_snapshot!("handler_create_user", files[0].content);
}
