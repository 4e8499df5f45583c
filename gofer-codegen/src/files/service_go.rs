use std::path::{Path, PathBuf};

use gofer_core::GeneratedFile;
use gofer_model::RenderContext;

use super::{render_call_args, render_params_avoiding, type_imports};
use crate::{CodeBuilder, GoImports, naming::safe_name};

const RECEIVER: &str = "s";

/// `<package>/service.go`: a service wrapping the repository.
pub struct ServiceGo<'a> {
    ctx: &'a RenderContext,
}

impl<'a> ServiceGo<'a> {
    pub fn new(ctx: &'a RenderContext) -> Self {
        Self { ctx }
    }

    fn service_name(&self) -> String {
        format!("{}Service", self.ctx.identity().model_name())
    }
}

impl GeneratedFile for ServiceGo<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.ctx.identity().package_name())
            .join("service.go")
    }

    fn render(&self) -> String {
        let identity = self.ctx.identity();
        let model = identity.model_name();
        let repo = identity.repo_name();
        let service = self.service_name();
        let var = safe_name(identity.model_var_name());
        let declared = self.ctx.declared_fields();
        // `Create` binds the receiver and the new model alongside its params.
        let taken = [RECEIVER, var.as_str()];

        let builder = CodeBuilder::new()
            .line(&format!("package {}", identity.package_name()))
            .blank();
        let builder = type_imports(declared, GoImports::new()).render(builder);

        builder
            .block_with_close(&format!("type {} struct {{", service), "}", |b| {
                b.line(&format!("repo *{}", repo))
            })
            .blank()
            .block_with_close(
                &format!("func NewService(repo *{}) *{} {{", repo, service),
                "}",
                |b| b.line(&format!("return &{}{{repo}}", service)),
            )
            .blank()
            .block_with_close(
                &format!(
                    "func ({} *{}) Create({}) (*{}, error) {{",
                    RECEIVER,
                    service,
                    render_params_avoiding(declared, &taken),
                    model
                ),
                "}",
                |b| {
                    b.line(&format!("{} := New({})", var, render_call_args(declared, &taken)))
                        .block_with_close(
                            &format!(
                                "if err := {}.repo.Store({}); err != nil {{",
                                RECEIVER, var
                            ),
                            "}",
                            |b| b.line("return nil, err"),
                        )
                        .blank()
                        .line(&format!("return {}, nil", var))
                },
            )
            .blank()
            .block_with_close(
                &format!(
                    "func ({} *{}) Get(id int) (*{}, error) {{",
                    RECEIVER, service, model
                ),
                "}",
                |b| b.line(&format!("return {}.repo.WithID(id)", RECEIVER)),
            )
            .build()
    }
}
