use std::path::Path;

use clap::Args;
use eyre::{Result, eyre};
use gofer_model::{GoferConfig, ProjectName};

use super::UnwrapOrExit;
use crate::{
    ops::{self, project::ScaffoldOptions},
    prompt,
    reports::{Output, PlanReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct ProjectCommand {
    /// Project name, starting with the configured prefix (e.g. go-casino)
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Skip the plan, the confirmation prompt and the updated files table
    #[arg(short, long)]
    pub mute: bool,
}

impl ProjectCommand {
    pub fn run(&self, config: &GoferConfig) -> Result<()> {
        let settings = &config.project;
        let project = ProjectName::new(&self.name, &settings.prefix).unwrap_or_exit();
        let target = project.target_dir(Path::new(".")).unwrap_or_exit();
        let mut out = TerminalOutput::new();

        if !self.mute {
            PlanReport::project(&settings.template, &settings.placeholder, &project)
                .render(&mut out);
            if !prompt::confirm()? {
                out.preformatted("Terminating...");
                return Ok(());
            }
        }

        let token = std::env::var(&settings.token_env)
            .ok()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| eyre!("{} env variable is not set", settings.token_env))?;

        let report = ops::scaffold(ScaffoldOptions {
            project: &project,
            target: &target,
            settings,
            token: &token,
            quiet: self.mute,
        })?;

        if !self.mute {
            report.render(&mut out);
        }
        Ok(())
    }
}
