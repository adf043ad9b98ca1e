use clap::Parser;
use miette::Result;
use leila::cli::{Cli, Commands};
use leila::output::Printer;
use leila::project::Project;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().with_verbose(cli.verbose);

    match cli.command {
        Commands::Generate(args) => {
            let project = Project::open(&cli.project)?;
            leila::cli::generate::run(args, &project, &printer)?;
        }
        Commands::AddFont(args) => {
            let project = Project::open(&cli.project)?;
            leila::cli::add_font::run(args, &project, &printer)?;
        }
        Commands::Completions(args) => leila::cli::completions::run(args, &printer)?,
    }

    Ok(())
}
