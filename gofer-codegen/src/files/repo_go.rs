use std::path::{Path, PathBuf};

use gofer_core::GeneratedFile;
use gofer_model::RenderContext;

use crate::{CodeBuilder, GoImports, naming::safe_name};

const GORM: &str = "gorm.io/gorm";

/// `<package>/repo.go`: a gorm-backed repository for the model.
pub struct RepoGo<'a> {
    ctx: &'a RenderContext,
}

impl<'a> RepoGo<'a> {
    pub fn new(ctx: &'a RenderContext) -> Self {
        Self { ctx }
    }
}

impl GeneratedFile for RepoGo<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.ctx.identity().package_name()).join("repo.go")
    }

    fn render(&self) -> String {
        let identity = self.ctx.identity();
        let model = identity.model_name();
        let repo = identity.repo_name();
        let var = safe_name(identity.model_var_name());

        let errors = vec![
            vec![
                "ErrNoRecord".to_string(),
                "error".to_string(),
                "= errors.New(\"record not found\")".to_string(),
            ],
            vec![
                "ErrNoRecords".to_string(),
                "error".to_string(),
                "= errors.New(\"records not found with filter\")".to_string(),
            ],
        ];

        let builder = CodeBuilder::new()
            .line(&format!("package {}", identity.package_name()))
            .blank();
        let builder = GoImports::new().with("errors").with(GORM).render(builder);

        builder
            .block_with_close("var (", ")", |b| b.aligned(&errors))
            .blank()
            .block_with_close(&format!("type {} struct {{", repo), "}", |b| {
                b.line("conn *gorm.DB")
            })
            .blank()
            .block_with_close(
                &format!("func NewRepo(conn *gorm.DB) *{} {{", repo),
                "}",
                |b| b.line(&format!("return &{}{{conn}}", repo)),
            )
            .blank()
            .block_with_close(
                &format!("func (r *{}) WithID(id int) (*{}, error) {{", repo, model),
                "}",
                |b| {
                    b.line(&format!("{} := {}{{}}", var, model))
                        .line(&format!(
                            "err := r.conn.Where(\"id = ?\", id).Find(&{}).Error",
                            var
                        ))
                        .block_with_close("if err != nil {", "}", |b| {
                            b.line(&format!("return &{}, err", var))
                        })
                        .blank()
                        .block_with_close(&format!("if {}.ID == 0 {{", var), "}", |b| {
                            b.line(&format!("return &{}, ErrNoRecord", var))
                        })
                        .blank()
                        .line(&format!("return &{}, err", var))
                },
            )
            .blank()
            .block_with_close(
                &format!("func (r *{}) Store({} *{}) error {{", repo, var, model),
                "}",
                |b| b.line(&format!("return r.conn.Create({}).Error", var)),
            )
            .build()
    }
}
