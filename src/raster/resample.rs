//! Raster resampling.

use image::imageops::FilterType;

use crate::error::ResizeError;

use super::Raster;

/// Interpolation filter used for every resize.
const FILTER: FilterType = FilterType::Lanczos3;

/// Resample a raster to exactly `width` x `height` pixels.
///
/// Colour model and component depth are preserved. The same input and target
/// size always produce identical pixels.
pub fn resize(raster: &Raster, width: u32, height: u32) -> Result<Raster, ResizeError> {
    if width == 0 || height == 0 {
        return Err(ResizeError::InvalidTarget { width, height });
    }

    let scaled = raster.as_image().resize_exact(width, height, FILTER);
    Ok(Raster::from_normalized(scaled))
}
