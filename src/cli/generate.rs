//! Generate command implementation.
//!
//! Creates an asset catalog entry from a single source image.

use std::path::PathBuf;

use clap::Args;

use crate::catalog::{generate_image_set, GeneratedAsset};
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::project::Project;

/// Create an image set in the project from a source image
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Asset name, e.g. `Star` or `AppIcon.appiconset`
    pub asset_name: String,

    /// Source image, used as the @3x variant
    pub asset_path: PathBuf,
}

pub fn run(args: GenerateArgs, project: &Project, printer: &Printer) -> Result<GeneratedAsset> {
    printer.status("Generating", &format!("{} from {}", args.asset_name, args.asset_path.display()));

    let asset = generate_image_set(project, &args.asset_name, &args.asset_path)?;
    let root = project.root();

    if asset.created_folder {
        printer.status("Created", &printer.cyan(&display_path(&asset.folder, root)));
    }

    for image in &asset.images {
        printer.verbose(
            "Wrote",
            &format!(
                "{} ({}x{})",
                display_path(&image.path, root),
                image.width,
                image.height
            ),
        );
    }

    if !asset.name.category().generates_variants() {
        printer.warning(
            "Skipped",
            "app icon images are not resized; add them to the icon set in Xcode",
        );
    }

    printer.verbose("Wrote", &display_path(&asset.contents, root));
    printer.success(
        "Finished",
        &format!(
            "{} ({})",
            asset.name.folder_name(),
            plural(asset.images.len() + 1, "file", "files")
        ),
    );

    Ok(asset)
}
