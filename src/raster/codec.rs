//! Reading image files into rasters and serializing rasters back out.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::error::{DecodeError, EncodeError};

use super::Raster;

/// Decode an image file into a raster.
///
/// The container is detected from the file contents, not its extension.
pub fn decode(path: &Path) -> Result<Raster, DecodeError> {
    let bytes = fs::read(path).map_err(|source| DecodeError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let image = image::load_from_memory(&bytes).map_err(|source| DecodeError::UnsupportedFormat {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Raster::from_image(image))
}

/// Encode a raster into the container named by `format_hint`.
///
/// `format_hint` is a file extension such as `"png"` or `"jpg"`. Containers
/// without alpha support receive the raster flattened to RGB.
pub fn encode(raster: &Raster, format_hint: &str) -> Result<Vec<u8>, EncodeError> {
    let format = ImageFormat::from_extension(format_hint).ok_or_else(|| {
        EncodeError::UnsupportedFormat {
            hint: format_hint.to_string(),
        }
    })?;

    let mut bytes = Cursor::new(Vec::new());
    let written = match format {
        ImageFormat::Jpeg => {
            DynamicImage::ImageRgb8(raster.as_image().to_rgb8()).write_to(&mut bytes, format)
        }
        _ => raster.as_image().write_to(&mut bytes, format),
    };

    written.map_err(|source| EncodeError::EncodingFailed {
        hint: format_hint.to_string(),
        source,
    })?;

    Ok(bytes.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn checker(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 128])
            }
        })
    }

    #[test]
    fn test_decode_missing_file() {
        let dir = tempdir().unwrap();
        let result = decode(&dir.path().join("nope.png"));
        assert!(matches!(result, Err(DecodeError::NotFound { .. })));
    }

    #[test]
    fn test_decode_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fake.png");
        fs::write(&path, b"definitely not a png").unwrap();

        let result = decode(&path);
        assert!(matches!(result, Err(DecodeError::UnsupportedFormat { .. })));
    }

    #[test]
    fn test_decode_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("checker.png");
        checker(4, 3).save(&path).unwrap();

        let raster = decode(&path).unwrap();
        assert_eq!(raster.dimensions(), (4, 3));
        assert_eq!(&raster.as_bytes()[..4], &[255, 0, 0, 255]);
        assert_eq!(&raster.as_bytes()[4..8], &[0, 0, 255, 128]);
    }

    #[test]
    fn test_encode_png_preserves_pixels() {
        let raster = Raster::from_rgba8(checker(5, 5));
        let bytes = encode(&raster, "png").unwrap();

        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
        let back = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(back, checker(5, 5));
    }

    #[test]
    fn test_encode_jpeg_drops_alpha() {
        let raster = Raster::from_rgba8(checker(8, 8));
        let bytes = encode(&raster, "jpg").unwrap();

        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
        let back = image::load_from_memory(&bytes).unwrap();
        assert_eq!((back.width(), back.height()), (8, 8));
    }

    #[test]
    fn test_encode_unknown_hint() {
        let raster = Raster::from_rgba8(checker(1, 1));
        let result = encode(&raster, "psd-ish");
        assert!(matches!(result, Err(EncodeError::UnsupportedFormat { .. })));
    }
}
