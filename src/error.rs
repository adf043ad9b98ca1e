use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::catalog::AssetCategory;

/// Main error type for leila operations
#[derive(Error, Diagnostic, Debug)]
pub enum LeilaError {
    #[error("Invalid asset name '{name}'")]
    #[diagnostic(code(leila::asset_name))]
    InvalidAssetName {
        name: String,
        #[help]
        help: Option<String>,
    },

    #[error("Asset file not found: {}", .path.display())]
    #[diagnostic(code(leila::source_not_found))]
    SourceNotFound { path: PathBuf },

    #[error("{} is not a valid source image for an {category}", .path.display())]
    #[diagnostic(code(leila::invalid_format))]
    InvalidFormat {
        path: PathBuf,
        category: AssetCategory,
        #[help]
        help: Option<String>,
    },

    #[error("Could not find the project asset catalog at {}", .path.display())]
    #[diagnostic(code(leila::not_an_xcode_project))]
    NotAnXcodeProject {
        path: PathBuf,
        #[help]
        help: Option<String>,
    },

    #[error("Failed to create directory {}", .path.display())]
    #[diagnostic(code(leila::create_dir))]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load image")]
    #[diagnostic(
        code(leila::decode),
        help("Check that the file is a valid image")
    )]
    DecodeFailed(#[from] DecodeError),

    #[error("Failed to resize image")]
    #[diagnostic(
        code(leila::resize),
        help("The source is used as the @3x image, so it must be at least 3x3 pixels")
    )]
    ResizeFailed(#[from] ResizeError),

    #[error("Failed to encode image")]
    #[diagnostic(code(leila::encode))]
    EncodeFailed(#[from] EncodeError),

    #[error("Failed to write {}", .path.display())]
    #[diagnostic(code(leila::write))]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Project directory not found: {}", .path.display())]
    #[diagnostic(code(leila::project_not_found))]
    ProjectNotFound { path: PathBuf },

    #[error("Font file not found: {}", .path.display())]
    #[diagnostic(code(leila::font_not_found))]
    FontNotFound { path: PathBuf },

    #[error("{} does not look like a font file", .path.display())]
    #[diagnostic(code(leila::invalid_font))]
    InvalidFont {
        path: PathBuf,
        #[help]
        help: Option<String>,
    },

    #[error("Could not find {}", .path.display())]
    #[diagnostic(code(leila::info_plist_not_found))]
    InfoPlistNotFound {
        path: PathBuf,
        #[help]
        help: Option<String>,
    },

    #[error("Could not read {}: {message}", .path.display())]
    #[diagnostic(code(leila::info_plist))]
    InfoPlistUnreadable {
        path: PathBuf,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Failed to copy font to {}", .to.display())]
    #[diagnostic(code(leila::font_copy))]
    FontCopyFailed {
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid project config {}: {message}", .path.display())]
    #[diagnostic(code(leila::config))]
    Config {
        path: PathBuf,
        message: String,
        #[help]
        help: Option<String>,
    },
}

/// Failure reading a source image.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("cannot read {}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} does not contain a supported image", .path.display())]
    UnsupportedFormat {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Failure serializing a raster into a file container.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("no image encoder for extension '{hint}'")]
    UnsupportedFormat { hint: String },

    #[error("cannot encode raster as '{hint}'")]
    EncodingFailed {
        hint: String,
        #[source]
        source: image::ImageError,
    },
}

/// Failure resampling a raster.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResizeError {
    #[error("invalid target size {width}x{height}: both dimensions must be at least 1 pixel")]
    InvalidTarget { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, LeilaError>;
