use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use gofer_codegen::{Generator, ModelScope};
use gofer_model::{GoferConfig, RenderContext};

use super::UnwrapOrExit;
use crate::{
    ops::{self, generate::GenerateOptions},
    prompt,
    reports::{Output, PlanReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Model name, lowercase (e.g. user)
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Skip the plan, the field table and the confirmation prompt
    #[arg(short, long)]
    pub mute: bool,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Model fields as name:type (e.g. user_name:string)
    pub fields: Vec<String>,
}

impl GenerateCommand {
    pub fn run(&self, config: &GoferConfig, scope: ModelScope) -> Result<()> {
        if config.generate.check_project_folder {
            ops::ensure_go_project(&self.output)?;
        }

        let ctx = RenderContext::assemble(&self.name, &self.fields, &config.generate.types)
            .unwrap_or_exit();
        let mut out = TerminalOutput::new();

        if !self.mute {
            PlanReport::model(&ctx, scope).render(&mut out);
        }
        if self.needs_confirmation() && !prompt::confirm()? {
            out.preformatted("Terminating...");
            return Ok(());
        }

        let report = ops::generate(
            &Generator::new(&ctx, scope),
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
        )?;

        if !self.mute || self.dry_run {
            report.render(&mut out);
        }
        Ok(())
    }

    /// A dry run writes nothing, so only a real, unmuted run asks first.
    fn needs_confirmation(&self) -> bool {
        !self.mute && !self.dry_run
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        command: GenerateCommand,
    }

    fn parse(args: &[&str]) -> GenerateCommand {
        Harness::parse_from(std::iter::once("gofer").chain(args.iter().copied())).command
    }

    #[test]
    fn test_default_run_asks_for_confirmation() {
        assert!(parse(&["-n", "user", "name:string"]).needs_confirmation());
    }

    #[test]
    fn test_dry_run_skips_confirmation() {
        let command = parse(&["-n", "user", "--dry-run", "name:string"]);
        assert!(command.dry_run);
        assert!(!command.needs_confirmation());
    }

    #[test]
    fn test_mute_skips_confirmation() {
        assert!(!parse(&["-n", "user", "-m"]).needs_confirmation());
    }
}
