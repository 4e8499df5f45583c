use std::io::{self, Write};

use clap::{Args, CommandFactory};
use clap_complete::Shell;
use eyre::Result;

use super::Cli;

#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    shell: Shell,
}

impl CompletionsCommand {
    pub fn run(&self) -> Result<()> {
        write_completions(self.shell, &mut io::stdout());
        Ok(())
    }
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_cover_subcommands() {
        let mut buf = Vec::new();
        write_completions(Shell::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();

        assert!(script.contains("gofer"));
        for sub in ["model", "gen", "handler", "project"] {
            assert!(script.contains(sub), "missing {sub}");
        }
    }
}
