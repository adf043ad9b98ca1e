//! Add-font command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::project::{register_font, Project, RegisteredFont, APP_FONTS_KEY};

/// Copy a font into the project and register it in Info.plist
#[derive(Args, Debug)]
pub struct AddFontArgs {
    /// TrueType (.ttf) or OpenType (.otf) font file
    pub font_path: PathBuf,
}

pub fn run(args: AddFontArgs, project: &Project, printer: &Printer) -> Result<RegisteredFont> {
    let font = register_font(project, &args.font_path)?;
    let root = project.root();

    if font.created_fonts_dir {
        printer.status("Created", &printer.cyan(&display_path(&project.fonts_dir(), root)));
    }
    printer.status("Copied", &display_path(&font.copied_to, root));

    if font.added_to_plist {
        printer.status(
            "Registered",
            &format!("{} in {}", font.file_name, APP_FONTS_KEY),
        );
    } else {
        printer.info(
            "Unchanged",
            &format!("{} already lists {}", APP_FONTS_KEY, font.file_name),
        );
    }

    printer.success("Finished", &font.file_name);
    Ok(font)
}
