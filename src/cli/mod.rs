pub mod add_font;
pub mod completions;
pub mod generate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// leila - Xcode project asset helper
#[derive(Parser, Debug)]
#[command(name = "leila")]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Xcode project directory (default: current directory)
    #[arg(long, short = 'C', global = true, default_value = ".")]
    pub project: PathBuf,

    /// Print every file written
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an image set (@1x, @2x, @3x) in the project from a source image
    ///
    /// The source is used as the @3x image. Pass a name ending in
    /// `.appiconset` (e.g. `AppIcon.appiconset`) to create an app icon set.
    #[command(visible_alias = "g")]
    Generate(generate::GenerateArgs),

    /// Copy a font into the project and register it in Info.plist
    #[command(visible_alias = "af")]
    AddFont(add_font::AddFontArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
