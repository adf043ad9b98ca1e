//! leila - Xcode project asset helper
//!
//! A library for generating multi-density asset catalog image sets from a
//! single source image, and for registering font files in a project.

pub mod catalog;
pub mod cli;
pub mod error;
pub mod output;
pub mod project;
pub mod raster;
pub mod write;

pub use catalog::{
    generate_image_set, generate_variants, AssetCategory, AssetName, Contents, ContentsImage,
    ContentsInfo, DensitySet, DensityVariant, GeneratedAsset, GeneratedImage, Scale,
};
pub use error::{DecodeError, EncodeError, LeilaError, ResizeError, Result};
pub use project::{register_font, Project, ProjectConfig, RegisteredFont};
pub use raster::{decode, encode, resize, ComponentDepth, Raster};
