mod completions;
mod generate;
mod handler;
mod project;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use gofer_codegen::ModelScope;
use gofer_model::GoferConfig;
use handler::HandlerCommand;
use project::ProjectCommand;

/// Extension trait for exiting on model errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for gofer_model::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "gofer")]
#[command(version)]
#[command(about = "Scaffold Go models, repositories, handlers and projects")]
pub(crate) struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to gofer.toml (defaults to ./gofer.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Model(cmd) => cmd.run(&self.load_config(), ModelScope::ModelAndRepo),
            Commands::Gen(cmd) => cmd.run(&self.load_config(), ModelScope::WithService),
            Commands::Handler(cmd) => cmd.run(&self.load_config()),
            Commands::Project(cmd) => cmd.run(&self.load_config()),
            Commands::Completions(cmd) => cmd.run(),
        }
    }

    fn load_config(&self) -> GoferConfig {
        match &self.config {
            Some(path) => GoferConfig::open(path),
            None => GoferConfig::discover("."),
        }
        .unwrap_or_exit()
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a model & repository
    Model(GenerateCommand),

    /// Generate a model, repository & service
    #[command(name = "gen")]
    Gen(GenerateCommand),

    /// Generate an HTTP handler
    Handler(HandlerCommand),

    /// Generate a new project from the template repository
    Project(ProjectCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
