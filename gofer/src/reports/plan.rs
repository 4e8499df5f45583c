//! The plan shown before anything is written.

use gofer_codegen::ModelScope;
use gofer_model::{ProjectName, RenderContext};

use super::output::{Output, Report};

/// Numbered steps and, for models, the fields that will be generated.
#[derive(Debug)]
pub struct PlanReport {
    /// Steps in execution order.
    pub steps: Vec<String>,
    /// Field table rows: exported name, type tag, JSON name.
    pub fields: Vec<[String; 3]>,
}

impl PlanReport {
    pub fn model(ctx: &RenderContext, scope: ModelScope) -> Self {
        let identity = ctx.identity();
        let mut steps = vec![
            format!("Create model {}", identity.model_name()),
            format!("Create repo {}", identity.repo_name()),
        ];
        if scope == ModelScope::WithService {
            steps.push(format!("Create service {}Service", identity.model_name()));
        }

        let fields = ctx
            .all_fields()
            .iter()
            .map(|f| {
                [
                    f.exported_name().to_string(),
                    f.field_type().to_string(),
                    f.raw_name().to_string(),
                ]
            })
            .collect();

        Self { steps, fields }
    }

    pub fn project(template: &str, placeholder: &str, project: &ProjectName) -> Self {
        Self {
            steps: vec![
                format!("Clone template repo {}", template),
                format!(
                    "Replace \"{}\" package with \"{}\"",
                    placeholder,
                    project.as_str()
                ),
            ],
            fields: Vec::new(),
        }
    }
}

impl Report for PlanReport {
    fn render(&self, out: &mut dyn Output) {
        for (i, step) in self.steps.iter().enumerate() {
            out.numbered_item(i + 1, step);
        }
        out.newline();

        if !self.fields.is_empty() {
            let rows: Vec<Vec<String>> = self
                .fields
                .iter()
                .enumerate()
                .map(|(i, [name, ty, json])| {
                    vec![(i + 1).to_string(), name.clone(), ty.clone(), json.clone()]
                })
                .collect();
            out.table(&["#", "Name", "Type", "JSON"], &rows);
            out.newline();
        }
    }
}

#[cfg(test)]
mod tests {
    use gofer_model::TypeSet;

    use super::*;
    use crate::reports::output::testing::RecordingOutput;

    #[test]
    fn test_model_plan() {
        let ctx =
            RenderContext::assemble("user", &["name:string", "is_active:bool"], &TypeSet::all())
                .unwrap();
        let mut out = RecordingOutput::default();
        PlanReport::model(&ctx, ModelScope::ModelAndRepo).render(&mut out);

        assert_eq!(
            out.lines,
            [
                "1. Create model User",
                "2. Create repo UserRepo",
                "",
                "# | Name | Type | JSON",
                "1 | Name | string | name",
                "2 | ISActive | bool | is_active",
                "3 | ID | int | id",
                "4 | Created | timestamp | created",
                "5 | Updated | timestamp | updated",
                "",
            ]
        );
    }

    #[test]
    fn test_gen_plan_includes_service() {
        let tokens: [&str; 0] = [];
        let ctx = RenderContext::assemble("order", &tokens, &TypeSet::all()).unwrap();
        let plan = PlanReport::model(&ctx, ModelScope::WithService);

        assert_eq!(plan.steps.last().unwrap(), "Create service OrderService");
        assert_eq!(plan.fields.len(), 3);
    }

    #[test]
    fn test_project_plan_has_no_table() {
        let project = ProjectName::new("go-casino", "go-").unwrap();
        let mut out = RecordingOutput::default();
        PlanReport::project("acme/go-template", "go-template", &project).render(&mut out);

        assert_eq!(
            out.lines,
            [
                "1. Clone template repo acme/go-template",
                "2. Replace \"go-template\" package with \"go-casino\"",
                "",
            ]
        );
    }
}
