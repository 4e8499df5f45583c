use gofer_core::GeneratedFile;
use gofer_model::{HandlerContext, RenderContext};

use crate::{
    Codegen,
    files::{HandlerGo, ModelGo, RepoGo, ServiceGo},
};

/// Which files a model generation produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelScope {
    /// Model and repository (`gofer model`)
    ModelAndRepo,
    /// Model, repository and service (`gofer gen`)
    WithService,
}

/// Generates the files of one model package
pub struct Generator<'a> {
    ctx: &'a RenderContext,
    scope: ModelScope,
}

impl<'a> Generator<'a> {
    pub fn new(ctx: &'a RenderContext, scope: ModelScope) -> Self {
        Self { ctx, scope }
    }
}

impl Codegen for Generator<'_> {
    fn files(&self) -> Vec<Box<dyn GeneratedFile + '_>> {
        let mut files: Vec<Box<dyn GeneratedFile + '_>> =
            vec![Box::new(ModelGo::new(self.ctx)), Box::new(RepoGo::new(self.ctx))];
        if self.scope == ModelScope::WithService {
            files.push(Box::new(ServiceGo::new(self.ctx)));
        }
        files
    }
}

/// Generates a standalone handler file
pub struct HandlerGenerator<'a> {
    ctx: &'a HandlerContext,
}

impl<'a> HandlerGenerator<'a> {
    pub fn new(ctx: &'a HandlerContext) -> Self {
        Self { ctx }
    }
}

impl Codegen for HandlerGenerator<'_> {
    fn files(&self) -> Vec<Box<dyn GeneratedFile + '_>> {
        vec![Box::new(HandlerGo::new(self.ctx))]
    }
}
