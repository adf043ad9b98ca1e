//! Asset catalog entries.
//!
//! An asset catalog (`Assets.xcassets`) holds one folder per asset. The
//! folder extension selects the [`AssetCategory`]; the folder always carries
//! a `Contents.json` manifest describing its files.

mod contents;
mod pipeline;
mod variants;

pub use contents::{Contents, ContentsImage, ContentsInfo, CONTENTS_FILENAME};
pub use pipeline::{generate_image_set, GeneratedAsset, GeneratedImage};
pub use variants::{generate_variants, DensitySet, DensityVariant, Scale};

use std::fmt;
use std::path::{Component, Path};

use crate::error::{LeilaError, Result};

/// Kind of asset catalog entry, selected by folder extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    /// `.imageset`: one image in three densities.
    ImageSet,
    /// `.appiconset`: application icon.
    IconSet,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 2] = [AssetCategory::ImageSet, AssetCategory::IconSet];

    /// Folder extension, without the leading dot.
    pub fn folder_extension(self) -> &'static str {
        match self {
            AssetCategory::ImageSet => "imageset",
            AssetCategory::IconSet => "appiconset",
        }
    }

    /// Source file extensions this category accepts.
    pub fn accepted_extensions(self) -> &'static [&'static str] {
        match self {
            AssetCategory::ImageSet | AssetCategory::IconSet => &["png"],
        }
    }

    pub fn accepts(self, extension: &str) -> bool {
        self.accepted_extensions()
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(extension))
    }

    /// Whether this category resamples the source into density variants.
    pub fn generates_variants(self) -> bool {
        matches!(self, AssetCategory::ImageSet)
    }

    /// Hint shown when a source file is rejected.
    pub fn format_help(self) -> String {
        match self {
            AssetCategory::ImageSet => "Image sets are generated from PNG files".to_string(),
            AssetCategory::IconSet => "App icons are generated from PNG files".to_string(),
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetCategory::ImageSet => write!(f, "image set"),
            AssetCategory::IconSet => write!(f, "app icon set"),
        }
    }
}

/// A normalized asset name.
///
/// `"Star"` becomes the folder `Star.imageset`; names already ending in a
/// category extension keep it. A name may nest the asset in catalog groups
/// (`"Icons/Star"`), but must stay inside the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetName {
    base: String,
    category: AssetCategory,
}

impl AssetName {
    pub fn parse(name: &str) -> Result<Self> {
        let (base, category) = AssetCategory::ALL
            .iter()
            .find_map(|&category| {
                name.strip_suffix(category.folder_extension())
                    .and_then(|rest| rest.strip_suffix('.'))
                    .map(|base| (base, category))
            })
            .unwrap_or((name, AssetCategory::ImageSet));

        if base.is_empty() {
            return Err(LeilaError::InvalidAssetName {
                name: name.to_string(),
                help: Some("Pass a name such as 'Star' or 'AppIcon.appiconset'".to_string()),
            });
        }

        let inside_catalog = Path::new(base)
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
        if !inside_catalog || base.ends_with('/') {
            return Err(LeilaError::InvalidAssetName {
                name: name.to_string(),
                help: Some(
                    "Use a relative name such as 'Star' or 'Icons/Star' without '.' or '..'"
                        .to_string(),
                ),
            });
        }

        Ok(Self {
            base: base.to_string(),
            category,
        })
    }

    /// Name without the category extension.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Last segment of the base; image files are named after it.
    pub fn file_stem(&self) -> &str {
        self.base
            .rsplit_once('/')
            .map_or(self.base.as_str(), |(_, stem)| stem)
    }

    pub fn category(&self) -> AssetCategory {
        self.category
    }

    /// Folder name inside the asset catalog.
    pub fn folder_name(&self) -> String {
        format!("{}.{}", self.base, self.category.folder_extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_becomes_image_set() {
        let name = AssetName::parse("Star").unwrap();
        assert_eq!(name.base(), "Star");
        assert_eq!(name.category(), AssetCategory::ImageSet);
        assert_eq!(name.folder_name(), "Star.imageset");
    }

    #[test]
    fn test_image_set_suffix_kept() {
        let name = AssetName::parse("Star.imageset").unwrap();
        assert_eq!(name.base(), "Star");
        assert_eq!(name.folder_name(), "Star.imageset");
    }

    #[test]
    fn test_icon_set_suffix_kept() {
        let name = AssetName::parse("AppIcon.appiconset").unwrap();
        assert_eq!(name.base(), "AppIcon");
        assert_eq!(name.category(), AssetCategory::IconSet);
        assert_eq!(name.folder_name(), "AppIcon.appiconset");
    }

    #[test]
    fn test_other_dotted_name_gets_suffix() {
        let name = AssetName::parse("logo.dark").unwrap();
        assert_eq!(name.folder_name(), "logo.dark.imageset");
    }

    #[test]
    fn test_suffix_without_dot_is_part_of_name() {
        let name = AssetName::parse("myimageset").unwrap();
        assert_eq!(name.folder_name(), "myimageset.imageset");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(AssetName::parse("").is_err());
        assert!(AssetName::parse(".imageset").is_err());
    }

    #[test]
    fn test_nested_name_keeps_groups_in_folder() {
        let name = AssetName::parse("Icons/Star").unwrap();
        assert_eq!(name.base(), "Icons/Star");
        assert_eq!(name.file_stem(), "Star");
        assert_eq!(name.folder_name(), "Icons/Star.imageset");

        let plain = AssetName::parse("Star").unwrap();
        assert_eq!(plain.file_stem(), "Star");
    }

    #[test]
    fn test_name_escaping_catalog_rejected() {
        for name in ["../Star", "Icons/../../Star", "/tmp/Star", "./Star", "Icons/", "Icons/.imageset"] {
            assert!(
                matches!(AssetName::parse(name), Err(LeilaError::InvalidAssetName { .. })),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_png_accepted_case_insensitively() {
        assert!(AssetCategory::ImageSet.accepts("png"));
        assert!(AssetCategory::ImageSet.accepts("PNG"));
        assert!(AssetCategory::IconSet.accepts("png"));
        assert!(!AssetCategory::ImageSet.accepts("jpg"));
        assert!(!AssetCategory::IconSet.accepts("svg"));
    }

    #[test]
    fn test_only_image_sets_generate_variants() {
        assert!(AssetCategory::ImageSet.generates_variants());
        assert!(!AssetCategory::IconSet.generates_variants());
    }
}
