//! Density variants.
//!
//! The source image is taken to be the @3x variant. The @1x size is a third
//! of it (floor division) and the @2x size is twice the @1x size, so the
//! three variants are always in exact 1:2:3 ratio. For sources not divisible
//! by 3 this means @2x is derived from the truncated @1x size rather than
//! from two thirds of the source; existing catalogs depend on those sizes.

use std::fmt;

use crate::error::ResizeError;
use crate::raster::{resize, Raster};

/// Display density multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scale {
    One,
    Two,
    Three,
}

impl Scale {
    /// Ascending order, as listed in manifests.
    pub const ALL: [Scale; 3] = [Scale::One, Scale::Two, Scale::Three];

    pub fn factor(self) -> u32 {
        match self {
            Scale::One => 1,
            Scale::Two => 2,
            Scale::Three => 3,
        }
    }

    /// Manifest label, e.g. `"2x"`.
    pub fn label(self) -> &'static str {
        match self {
            Scale::One => "1x",
            Scale::Two => "2x",
            Scale::Three => "3x",
        }
    }

    /// File name for this density, e.g. `Star@2x.png`.
    pub fn file_name(self, base: &str, extension: &str) -> String {
        format!("{}@{}.{}", base, self.label(), extension)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Target pixel size for one density.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DensityVariant {
    pub scale: Scale,
    pub width: u32,
    pub height: u32,
}

impl DensityVariant {
    /// Plan the three variant sizes for a source of the given size.
    pub fn plan(source_width: u32, source_height: u32) -> [DensityVariant; 3] {
        let width1 = source_width / 3;
        let height1 = source_height / 3;

        Scale::ALL.map(|scale| match scale {
            Scale::Three => DensityVariant {
                scale,
                width: source_width,
                height: source_height,
            },
            _ => DensityVariant {
                scale,
                width: width1 * scale.factor(),
                height: height1 * scale.factor(),
            },
        })
    }
}

/// The three rasters of an image set.
#[derive(Debug, Clone)]
pub struct DensitySet {
    pub one: Raster,
    pub two: Raster,
    pub three: Raster,
}

impl DensitySet {
    pub fn get(&self, scale: Scale) -> &Raster {
        match scale {
            Scale::One => &self.one,
            Scale::Two => &self.two,
            Scale::Three => &self.three,
        }
    }

    /// Variants in ascending scale order.
    pub fn iter(&self) -> impl Iterator<Item = (Scale, &Raster)> {
        Scale::ALL.into_iter().map(move |scale| (scale, self.get(scale)))
    }
}

/// Derive the @1x and @2x rasters from a source used as @3x.
///
/// The source moves into the set unchanged as the @3x variant.
pub fn generate_variants(source: Raster) -> Result<DensitySet, ResizeError> {
    let [one, two, _] = DensityVariant::plan(source.width(), source.height());

    let one = resize(&source, one.width, one.height)?;
    let two = resize(&source, two.width, two.height)?;

    Ok(DensitySet {
        one,
        two,
        three: source,
    })
}
