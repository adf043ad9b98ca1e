//! In-memory rasters and the stages that read, scale and write them.
//!
//! A [`Raster`] is always RGBA with straight alpha, stored at either 8 or 16
//! bits per component. Every operation produces a new raster; none mutate
//! their input.

mod codec;
mod resample;

pub use codec::{decode, encode};
pub use resample::resize;

use image::{ColorType, DynamicImage, RgbaImage};

/// Bits per colour component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentDepth {
    Eight,
    Sixteen,
}

impl ComponentDepth {
    pub fn bits(self) -> u32 {
        match self {
            ComponentDepth::Eight => 8,
            ComponentDepth::Sixteen => 16,
        }
    }
}

/// A decoded RGBA bitmap.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    image: DynamicImage,
}

impl Raster {
    /// Wrap a decoded image, normalizing it to RGBA.
    ///
    /// Sources with more than 8 bits per component keep 16 bits.
    pub fn from_image(image: DynamicImage) -> Self {
        let image = match image {
            DynamicImage::ImageRgba8(_) | DynamicImage::ImageRgba16(_) => image,
            other if bytes_per_component(other.color()) > 1 => {
                DynamicImage::ImageRgba16(other.into_rgba16())
            }
            other => DynamicImage::ImageRgba8(other.into_rgba8()),
        };
        Self { image }
    }

    pub fn from_rgba8(pixels: RgbaImage) -> Self {
        Self {
            image: DynamicImage::ImageRgba8(pixels),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn depth(&self) -> ComponentDepth {
        match self.image {
            DynamicImage::ImageRgba16(_) => ComponentDepth::Sixteen,
            _ => ComponentDepth::Eight,
        }
    }

    /// Length of one pixel row in bytes.
    pub fn bytes_per_row(&self) -> usize {
        let bytes_per_pixel = 4 * (self.depth().bits() / 8) as usize;
        self.width() as usize * bytes_per_pixel
    }

    /// Raw pixel data, rows packed without padding.
    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_bytes()
    }

    pub(crate) fn as_image(&self) -> &DynamicImage {
        &self.image
    }

    pub(crate) fn from_normalized(image: DynamicImage) -> Self {
        Self { image }
    }
}

fn bytes_per_component(color: ColorType) -> u8 {
    color.bytes_per_pixel() / color.channel_count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, ImageBuffer, Luma, Rgb, RgbImage, Rgba};

    #[test]
    fn test_rgb_source_gains_alpha() {
        let rgb: RgbImage = ImageBuffer::from_pixel(2, 1, Rgb([10, 20, 30]));
        let raster = Raster::from_image(DynamicImage::ImageRgb8(rgb));

        assert_eq!(raster.depth(), ComponentDepth::Eight);
        assert_eq!(raster.as_bytes(), &[10, 20, 30, 255, 10, 20, 30, 255]);
    }

    #[test]
    fn test_sixteen_bit_source_keeps_depth() {
        let gray: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::from_pixel(3, 2, Luma([1000]));
        let raster = Raster::from_image(DynamicImage::ImageLuma16(gray));

        assert_eq!(raster.depth(), ComponentDepth::Sixteen);
        assert_eq!(raster.bytes_per_row(), 3 * 8);
    }

    #[test]
    fn test_eight_bit_gray_is_rgba8() {
        let gray: GrayImage = ImageBuffer::from_pixel(4, 4, Luma([7]));
        let raster = Raster::from_image(DynamicImage::ImageLuma8(gray));

        assert_eq!(raster.depth(), ComponentDepth::Eight);
        assert_eq!(raster.bytes_per_row(), 16);
        assert_eq!(raster.as_bytes().len(), 4 * 16);
    }

    #[test]
    fn test_dimensions() {
        let raster = Raster::from_rgba8(RgbaImage::from_pixel(5, 7, Rgba([0, 0, 0, 0])));
        assert_eq!(raster.dimensions(), (5, 7));
    }
}
