//! `leila completions`: shell completion scripts.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, CommandFactory};
use clap_complete::Shell;

use crate::error::{LeilaError, Result};
use crate::output::Printer;
use crate::write::write_atomic;

use super::Cli;

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: CompletionsArgs, printer: &Printer) -> Result<()> {
    match args.output {
        Some(path) => {
            let mut script = Vec::new();
            write_completions(args.shell, &mut script);
            write_atomic(&path, &script)?;
            printer.success("Wrote", &format!("{} completions to {}", args.shell, path.display()));
        }
        None => {
            let mut stdout = io::stdout().lock();
            write_completions(args.shell, &mut stdout);
            stdout.flush().map_err(|source| LeilaError::WriteFailed {
                path: PathBuf::from("<stdout>"),
                source,
            })?;
        }
    }
    Ok(())
}

/// Render the completion script for `shell` into `out`.
pub fn write_completions(shell: Shell, out: &mut impl Write) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, bin_name, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::tempdir;

    fn script(shell: Shell) -> String {
        let mut out = Vec::new();
        write_completions(shell, &mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_bash_completions_cover_subcommands() {
        let bash = script(Shell::Bash);
        assert!(bash.contains("leila"));
        assert!(bash.contains("generate"));
        assert!(bash.contains("add-font"));
    }

    #[test]
    fn test_zsh_completions_name_binary() {
        assert!(script(Shell::Zsh).contains("#compdef leila"));
    }

    #[test]
    fn test_parse_output_flag() {
        let cli = Cli::try_parse_from(["leila", "completions", "fish", "-o", "leila.fish"]).unwrap();
        match cli.command {
            crate::cli::Commands::Completions(args) => {
                assert_eq!(args.shell, Shell::Fish);
                assert_eq!(args.output, Some(PathBuf::from("leila.fish")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_run_writes_script_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("leila.bash");

        run(
            CompletionsArgs {
                shell: Shell::Bash,
                output: Some(path.clone()),
            },
            &Printer::new(),
        )
        .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), script(Shell::Bash));
    }
}
