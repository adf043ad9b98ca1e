//! `Contents.json` manifests.
//!
//! Written in the layout Xcode itself produces: an `images` list followed by
//! an `info` block.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LeilaError, Result};
use crate::write::write_atomic;

use super::Scale;

pub const CONTENTS_FILENAME: &str = "Contents.json";

const IDIOM_UNIVERSAL: &str = "universal";
const AUTHOR: &str = "xcode";
const VERSION: u32 = 1;

/// An asset folder manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contents {
    pub images: Vec<ContentsImage>,
    pub info: ContentsInfo,
}

/// One file entry in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentsImage {
    pub filename: String,
    pub idiom: String,
    pub scale: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentsInfo {
    pub author: String,
    pub version: u32,
}

impl Default for ContentsInfo {
    fn default() -> Self {
        Self {
            author: AUTHOR.to_string(),
            version: VERSION,
        }
    }
}

impl Contents {
    /// Manifest for a three-density image set, entries in 1x, 2x, 3x order.
    pub fn image_set(base: &str, extension: &str) -> Self {
        let images = Scale::ALL
            .into_iter()
            .map(|scale| ContentsImage {
                filename: scale.file_name(base, extension),
                idiom: IDIOM_UNIVERSAL.to_string(),
                scale: scale.label().to_string(),
            })
            .collect();

        Self {
            images,
            info: ContentsInfo::default(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write `Contents.json` into `folder`.
    ///
    /// The manifest is written to a temporary file in the same folder and
    /// renamed into place, so readers never see a partial file.
    pub fn write(&self, folder: &Path) -> Result<PathBuf> {
        let path = folder.join(CONTENTS_FILENAME);
        let json = self.to_json().map_err(|e| LeilaError::WriteFailed {
            path: path.clone(),
            source: e.into(),
        })?;

        write_atomic(&path, json.as_bytes())?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_image_set_entries() {
        let contents = Contents::image_set("icon", "png");

        let filenames: Vec<&str> = contents.images.iter().map(|i| i.filename.as_str()).collect();
        assert_eq!(filenames, vec!["icon@1x.png", "icon@2x.png", "icon@3x.png"]);

        let scales: Vec<&str> = contents.images.iter().map(|i| i.scale.as_str()).collect();
        assert_eq!(scales, vec!["1x", "2x", "3x"]);

        assert!(contents.images.iter().all(|i| i.idiom == "universal"));
        assert_eq!(contents.info.author, "xcode");
        assert_eq!(contents.info.version, 1);
    }

    #[test]
    fn test_image_set_json_layout() {
        let contents = Contents::image_set("icon", "png");
        insta::assert_json_snapshot!(contents, @r###"
        {
          "images": [
            {
              "filename": "icon@1x.png",
              "idiom": "universal",
              "scale": "1x"
            },
            {
              "filename": "icon@2x.png",
              "idiom": "universal",
              "scale": "2x"
            },
            {
              "filename": "icon@3x.png",
              "idiom": "universal",
              "scale": "3x"
            }
          ],
          "info": {
            "author": "xcode",
            "version": 1
          }
        }
        "###);
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = tempdir().unwrap();
        let contents = Contents::image_set("Star", "png");

        let path = contents.write(dir.path()).unwrap();
        assert_eq!(path, dir.path().join("Contents.json"));
        let parsed: Contents = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, contents);
    }

    #[test]
    fn test_write_replaces_existing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Contents.json"), "stale").unwrap();

        Contents::image_set("a", "png").write(dir.path()).unwrap();

        let content = fs::read_to_string(dir.path().join("Contents.json")).unwrap();
        assert!(content.contains("a@3x.png"));
        assert!(!content.contains("stale"));
    }

    #[test]
    fn test_write_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        Contents::image_set("a", "png").write(dir.path()).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_write_into_missing_folder_fails() {
        let dir = tempdir().unwrap();
        let result = Contents::image_set("a", "png").write(&dir.path().join("missing"));
        assert!(matches!(result, Err(LeilaError::WriteFailed { .. })));
    }
}
