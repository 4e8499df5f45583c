use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use gofer_codegen::HandlerGenerator;
use gofer_model::{GoferConfig, HandlerContext};

use super::UnwrapOrExit;
use crate::{
    ops::{self, generate::GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct HandlerCommand {
    /// Handler name (e.g. create_user)
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Go package the handler belongs to
    #[arg(short, long, default_value = "")]
    pub package: String,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Request fields as name:type (e.g. email:string)
    pub fields: Vec<String>,
}

impl HandlerCommand {
    pub fn run(&self, config: &GoferConfig) -> Result<()> {
        let ctx = HandlerContext::assemble(
            &self.name,
            &self.package,
            &self.fields,
            &config.generate.types,
        )
        .unwrap_or_exit();

        let report = ops::generate(
            &HandlerGenerator::new(&ctx),
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
