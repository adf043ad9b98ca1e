//! Font registration.
//!
//! Copies a font file into the project's fonts folder and lists it under
//! `UIAppFonts` in the project's Info.plist.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use plist::{Dictionary, Value};

use crate::error::{LeilaError, Result};
use crate::write::{ensure_dir, write_atomic};

use super::Project;

/// Info.plist key listing bundled font files.
pub const APP_FONTS_KEY: &str = "UIAppFonts";

const FONT_EXTENSIONS: [&str; 2] = ["ttf", "otf"];

/// Outcome of a font registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredFont {
    /// File name added to `UIAppFonts`.
    pub file_name: String,
    /// Where the font was copied.
    pub copied_to: PathBuf,
    /// Whether the fonts folder had to be created.
    pub created_fonts_dir: bool,
    /// False when the plist already listed the font.
    pub added_to_plist: bool,
}

pub fn register_font(project: &Project, font_path: &Path) -> Result<RegisteredFont> {
    if !font_path.is_file() {
        return Err(LeilaError::FontNotFound {
            path: font_path.to_path_buf(),
        });
    }

    let is_font = font_path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| FONT_EXTENSIONS.iter().any(|f| f.eq_ignore_ascii_case(ext)));
    if !is_font {
        return Err(LeilaError::InvalidFont {
            path: font_path.to_path_buf(),
            help: Some("Fonts must be OpenType (otf) or TrueType (ttf) files".to_string()),
        });
    }

    let file_name = font_path
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| LeilaError::InvalidFont {
            path: font_path.to_path_buf(),
            help: Some("Font file names must be valid UTF-8".to_string()),
        })?;

    if !project.root().is_dir() {
        return Err(LeilaError::ProjectNotFound {
            path: project.root().to_path_buf(),
        });
    }

    let plist_path = project.info_plist();
    if !plist_path.is_file() {
        return Err(LeilaError::InfoPlistNotFound {
            path: plist_path,
            help: Some(
                "Run the command from the folder that contains Info.plist, or pass --project"
                    .to_string(),
            ),
        });
    }

    // The plist must accept the entry before anything lands on disk.
    let mut info = load_info_plist(&plist_path)?;
    let added_to_plist = add_app_font(&mut info, &file_name).map_err(|message| {
        LeilaError::InfoPlistUnreadable {
            path: plist_path.clone(),
            message,
            help: None,
        }
    })?;

    let fonts_dir = project.fonts_dir();
    let created_fonts_dir = ensure_dir(&fonts_dir)?;

    let copied_to = fonts_dir.join(&file_name);
    copy_new(font_path, &copied_to)?;

    if added_to_plist {
        save_info_plist(&plist_path, info)?;
    }

    Ok(RegisteredFont {
        file_name,
        copied_to,
        created_fonts_dir,
        added_to_plist,
    })
}

fn load_info_plist(path: &Path) -> Result<Dictionary> {
    let unreadable = |message: String| LeilaError::InfoPlistUnreadable {
        path: path.to_path_buf(),
        message,
        help: Some(
            "Check that the file is a valid property list and that you can read and write it"
                .to_string(),
        ),
    };

    Value::from_file(path)
        .map_err(|e| unreadable(e.to_string()))?
        .into_dictionary()
        .ok_or_else(|| unreadable("root element is not a dictionary".to_string()))
}

fn save_info_plist(path: &Path, info: Dictionary) -> Result<()> {
    let mut bytes = Vec::new();
    Value::Dictionary(info)
        .to_writer_xml(&mut bytes)
        .map_err(|e| LeilaError::WriteFailed {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::Other, e.to_string()),
        })?;

    write_atomic(path, &bytes)
}

/// Copy `from` to `to`, refusing to replace an existing file.
fn copy_new(from: &Path, to: &Path) -> Result<()> {
    let copy_failed = |source: io::Error| LeilaError::FontCopyFailed {
        to: to.to_path_buf(),
        source,
    };

    let mut source = fs::File::open(from).map_err(copy_failed)?;
    let mut target = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(to)
        .map_err(copy_failed)?;
    io::copy(&mut source, &mut target).map_err(copy_failed)?;

    Ok(())
}

/// Append `file_name` to `UIAppFonts`, creating the array when absent.
///
/// Returns `false` if the name was already listed.
fn add_app_font(info: &mut Dictionary, file_name: &str) -> std::result::Result<bool, String> {
    match info.get_mut(APP_FONTS_KEY) {
        Some(Value::Array(fonts)) => {
            if fonts.iter().any(|f| f.as_string() == Some(file_name)) {
                return Ok(false);
            }
            fonts.push(Value::String(file_name.to_string()));
        }
        Some(_) => return Err(format!("{} is not an array", APP_FONTS_KEY)),
        None => {
            info.insert(
                APP_FONTS_KEY.to_string(),
                Value::Array(vec![Value::String(file_name.to_string())]),
            );
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_app_font_creates_key() {
        let mut info = Dictionary::new();
        assert!(add_app_font(&mut info, "Inter.ttf").unwrap());

        let fonts = info.get(APP_FONTS_KEY).and_then(Value::as_array).unwrap();
        assert_eq!(fonts, &vec![Value::String("Inter.ttf".to_string())]);
    }

    #[test]
    fn test_add_app_font_appends() {
        let mut info = Dictionary::new();
        info.insert(
            APP_FONTS_KEY.to_string(),
            Value::Array(vec![Value::String("A.otf".to_string())]),
        );

        assert!(add_app_font(&mut info, "B.ttf").unwrap());

        let fonts: Vec<&str> = info
            .get(APP_FONTS_KEY)
            .and_then(Value::as_array)
            .unwrap()
            .iter()
            .filter_map(Value::as_string)
            .collect();
        assert_eq!(fonts, vec!["A.otf", "B.ttf"]);
    }

    #[test]
    fn test_add_app_font_skips_duplicate() {
        let mut info = Dictionary::new();
        add_app_font(&mut info, "A.otf").unwrap();

        assert!(!add_app_font(&mut info, "A.otf").unwrap());
        let fonts = info.get(APP_FONTS_KEY).and_then(Value::as_array).unwrap();
        assert_eq!(fonts.len(), 1);
    }

    #[test]
    fn test_add_app_font_rejects_non_array() {
        let mut info = Dictionary::new();
        info.insert(APP_FONTS_KEY.to_string(), Value::String("oops".to_string()));

        assert!(add_app_font(&mut info, "A.otf").is_err());
    }
}
