//! Resize pass: one frame per target icon size.

use crate::config::IconSize;
use crate::icon::SourceImage;
use image::RgbaImage;
use image::imageops::{self, FilterType};

/// Source image resampled to a single icon size.
#[derive(Debug, Clone)]
pub struct ResizedFrame {
    /// Target size this frame was produced for.
    pub size: IconSize,
    /// RGBA8 pixels at exactly `size`.
    pub pixels: RgbaImage,
}

/// Resizes `source` to every entry of `sizes`, preserving order.
///
/// Uses Lanczos3, which gives the best quality for downscaling. The source is
/// stretched to each square target; no cropping or padding is applied.
pub fn resize_frames(source: &SourceImage, sizes: &[IconSize]) -> Vec<ResizedFrame> {
    if !source.is_square() {
        log::warn!(
            "Source image {} is {}x{}, not square; icons will be distorted",
            source.path().display(),
            source.width(),
            source.height()
        );
    }

    sizes
        .iter()
        .map(|&size| {
            let (width, height) = size.dimensions();
            log::debug!("Resizing to {}", size);
            ResizedFrame {
                size,
                pixels: imageops::resize(source.pixels(), width, height, FilterType::Lanczos3),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ICON_SIZES;
    use image::{Rgb, RgbImage, Rgba};
    use tempfile::TempDir;

    fn load_fixture(img: image::DynamicImage) -> (TempDir, SourceImage) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("original.png");
        img.save(&path).unwrap();
        let source = SourceImage::load(&path).unwrap();
        (temp_dir, source)
    }

    #[test]
    fn test_frames_match_target_sizes_in_order() {
        let (_dir, source) = load_fixture(RgbImage::from_pixel(300, 300, Rgb([0, 128, 255])).into());

        let frames = resize_frames(&source, &ICON_SIZES);

        assert_eq!(frames.len(), ICON_SIZES.len());
        for (frame, size) in frames.iter().zip(ICON_SIZES) {
            assert_eq!(frame.size, size);
            assert_eq!(frame.pixels.dimensions(), size.dimensions());
        }
    }

    #[test]
    fn test_opaque_source_stays_opaque() {
        let (_dir, source) = load_fixture(RgbImage::from_pixel(64, 64, Rgb([90, 90, 90])).into());

        for frame in resize_frames(&source, &ICON_SIZES) {
            assert!(
                frame.pixels.pixels().all(|p| p.0[3] == 255),
                "{} frame lost opacity",
                frame.size
            );
        }
    }

    #[test]
    fn test_transparency_is_preserved() {
        let (_dir, source) = load_fixture(
            image::RgbaImage::from_pixel(128, 128, Rgba([255, 0, 0, 0])).into(),
        );

        let frames = resize_frames(&source, &ICON_SIZES[..2]);
        assert!(frames.iter().all(|f| f.pixels.pixels().all(|p| p.0[3] == 0)));
    }

    #[test]
    fn test_non_square_source_is_stretched() {
        let (_dir, source) = load_fixture(RgbImage::from_pixel(100, 40, Rgb([1, 1, 1])).into());

        let frames = resize_frames(&source, &ICON_SIZES);
        assert!(frames.iter().all(|f| f.pixels.width() == f.pixels.height()));
    }
}
