//! Asset generation pipeline.
//!
//! Validates the request, then writes the density variants and the
//! `Contents.json` manifest into the asset catalog. Every check runs before
//! anything is written. Once writing starts there is no rollback: a failure
//! can leave earlier images in place, but the manifest itself is always
//! replaced atomically.

use std::path::{Path, PathBuf};

use crate::error::{LeilaError, Result};
use crate::project::Project;
use crate::raster::{decode, encode};
use crate::write::{ensure_dir, write_file};

use super::{generate_variants, AssetCategory, AssetName, Contents, Scale};

/// One image file written by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub scale: Scale,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Summary of a completed generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAsset {
    pub name: AssetName,
    /// The asset folder inside the catalog.
    pub folder: PathBuf,
    /// Whether the folder had to be created.
    pub created_folder: bool,
    /// Images in ascending scale order; empty for icon sets.
    pub images: Vec<GeneratedImage>,
    pub contents: PathBuf,
}

/// Generate an asset catalog entry named `asset_name` from `source`.
pub fn generate_image_set(
    project: &Project,
    asset_name: &str,
    source: &Path,
) -> Result<GeneratedAsset> {
    let name = AssetName::parse(asset_name)?;
    let category = name.category();

    if !source.exists() {
        return Err(LeilaError::SourceNotFound {
            path: source.to_path_buf(),
        });
    }

    let extension = source
        .extension()
        .and_then(|e| e.to_str())
        .filter(|ext| category.accepts(ext))
        .ok_or_else(|| LeilaError::InvalidFormat {
            path: source.to_path_buf(),
            category,
            help: Some(category.format_help()),
        })?;

    let catalog = project.asset_catalog();
    if !catalog.is_dir() {
        return Err(LeilaError::NotAnXcodeProject {
            path: catalog,
            help: Some("Check that the directory is an Xcode project".to_string()),
        });
    }

    let folder = catalog.join(name.folder_name());
    let created_folder = ensure_dir(&folder)?;

    let images = match category {
        AssetCategory::ImageSet => write_variants(source, &folder, name.file_stem(), extension)?,
        AssetCategory::IconSet => Vec::new(),
    };

    let contents = Contents::image_set(name.file_stem(), extension).write(&folder)?;

    Ok(GeneratedAsset {
        name,
        folder,
        created_folder,
        images,
        contents,
    })
}

/// Decode once, resample twice, encode and write all three densities.
fn write_variants(
    source: &Path,
    folder: &Path,
    stem: &str,
    extension: &str,
) -> Result<Vec<GeneratedImage>> {
    let raster = decode(source)?;
    let variants = generate_variants(raster)?;

    let mut encoded = Vec::with_capacity(Scale::ALL.len());
    for (scale, raster) in variants.iter() {
        let bytes = encode(raster, extension)?;
        encoded.push((scale, raster.dimensions(), bytes));
    }

    let mut images = Vec::with_capacity(encoded.len());
    for (scale, (width, height), bytes) in encoded {
        let path = folder.join(scale.file_name(stem, extension));
        write_file(&path, &bytes)?;
        images.push(GeneratedImage {
            scale,
            path,
            width,
            height,
        });
    }

    Ok(images)
}
