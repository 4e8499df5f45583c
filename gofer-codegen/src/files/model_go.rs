use std::path::{Path, PathBuf};

use gofer_core::GeneratedFile;
use gofer_model::RenderContext;

use super::{param_ident, render_func_params, struct_rows, type_imports};
use crate::{CodeBuilder, GoImports};

/// `<package>/<package>.go`: the model struct and its constructor.
pub struct ModelGo<'a> {
    ctx: &'a RenderContext,
}

impl<'a> ModelGo<'a> {
    pub fn new(ctx: &'a RenderContext) -> Self {
        Self { ctx }
    }

    fn render_constructor(&self, builder: CodeBuilder) -> CodeBuilder {
        let model = self.ctx.identity().model_name();
        let declared = self.ctx.declared_fields();
        let header = format!(
            "func New({}) *{} {{",
            render_func_params(declared),
            model
        );

        if declared.is_empty() {
            return builder.block_with_close(&header, "}", |b| {
                b.line(&format!("return &{}{{}}", model))
            });
        }

        let assignments: Vec<Vec<String>> = declared
            .iter()
            .map(|f| {
                vec![
                    format!("{}:", f.exported_name()),
                    format!("{},", param_ident(f, &[])),
                ]
            })
            .collect();

        builder.block_with_close(&header, "}", |b| {
            b.block_with_close(&format!("return &{}{{", model), "}", |b| {
                b.aligned(&assignments)
            })
        })
    }
}

impl GeneratedFile for ModelGo<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        let package = self.ctx.identity().package_name();
        base.join(package).join(format!("{}.go", package))
    }

    fn render(&self) -> String {
        let identity = self.ctx.identity();
        let fields = self.ctx.all_fields();

        let builder = CodeBuilder::new()
            .line(&format!("package {}", identity.package_name()))
            .blank();
        let builder = type_imports(fields, GoImports::new()).render(builder);

        let builder = builder
            .block_with_close(&format!("type {} struct {{", identity.model_name()), "}", |b| {
                b.aligned(&struct_rows(fields))
            })
            .blank();

        self.render_constructor(builder).build()
    }
}

#[cfg(test)]
mod tests {
    use gofer_model::TypeSet;

    use super::*;

    #[test]
    fn test_path() {
        let ctx = RenderContext::assemble("user", &["name:string"], &TypeSet::all()).unwrap();
        assert_eq!(
            ModelGo::new(&ctx).path(Path::new("out")),
            PathBuf::from("out/user/user.go")
        );
    }

    #[test]
    fn test_constructor_without_declared_fields() {
        let tokens: [&str; 0] = [];
        let ctx = RenderContext::assemble("tag", &tokens, &TypeSet::all()).unwrap();
        let content = ModelGo::new(&ctx).render();

        assert!(content.contains("func New() *Tag {\n\treturn &Tag{}\n}\n"));
        assert!(content.contains("\tID      int       `json:\"id\"`\n"));
    }

    #[test]
    fn test_reserved_param_is_escaped() {
        let ctx = RenderContext::assemble("item", &["type:string"], &TypeSet::all()).unwrap();
        let content = ModelGo::new(&ctx).render();

        assert!(content.contains("func New(_type string) *Item {"));
        assert!(content.contains("\t\tType: _type,\n"));
        assert!(content.contains("`json:\"type\"`"));
    }
}
