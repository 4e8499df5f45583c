use std::path::{Path, PathBuf};

use gofer_core::GeneratedFile;
use gofer_model::HandlerContext;

use super::{struct_rows, type_imports};
use crate::{CodeBuilder, GoImports};

/// `<name>_handler.go`: a `net/http` handler decoding a JSON request body.
pub struct HandlerGo<'a> {
    ctx: &'a HandlerContext,
}

impl<'a> HandlerGo<'a> {
    pub fn new(ctx: &'a HandlerContext) -> Self {
        Self { ctx }
    }

    fn request_struct(&self, builder: CodeBuilder, request: &str) -> CodeBuilder {
        let arguments = self.ctx.arguments();
        if arguments.is_empty() {
            return builder.line(&format!("type {} struct{{}}", request));
        }
        builder.block_with_close(&format!("type {} struct {{", request), "}", |b| {
            b.aligned(&struct_rows(arguments))
        })
    }
}

impl GeneratedFile for HandlerGo<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}_handler.go", self.ctx.identity().file_stem()))
    }

    fn render(&self) -> String {
        let identity = self.ctx.identity();
        let name = identity.handler_name();
        let request = format!("{}Request", name);

        let imports = GoImports::new().with("encoding/json").with("net/http");
        let imports = type_imports(self.ctx.arguments(), imports);

        let builder = CodeBuilder::new()
            .line(&format!("package {}", identity.package_name()))
            .blank();
        let builder = imports.render(builder);
        let builder = self.request_struct(builder, &request).blank();

        builder
            .block_with_close(
                &format!("func {}Handler() http.HandlerFunc {{", name),
                "}",
                |b| {
                    b.block_with_close(
                        "return func(w http.ResponseWriter, r *http.Request) {",
                        "}",
                        |b| {
                            b.line(&format!("var req {}", request))
                                .block_with_close(
                                    "if err := json.NewDecoder(r.Body).Decode(&req); err != nil {",
                                    "}",
                                    |b| {
                                        b.line("http.Error(w, err.Error(), http.StatusBadRequest)")
                                            .line("return")
                                    },
                                )
                                .blank()
                                .line("w.WriteHeader(http.StatusOK)")
                        },
                    )
                },
            )
            .build()
    }
}
