//! Loading and normalizing the source image.

use crate::error::{Error, ErrorExt, Result};
use image::{ColorType, ImageReader, RgbaImage};
use std::path::{Path, PathBuf};

/// Decoded source image, normalized to RGBA8.
///
/// Loaded once per build and only read afterwards.
#[derive(Debug, Clone)]
pub struct SourceImage {
    path: PathBuf,
    original_color: ColorType,
    pixels: RgbaImage,
}

impl SourceImage {
    /// Opens and decodes the image at `path`, converting it to RGBA8.
    ///
    /// The format is sniffed from the file contents, so a PNG saved with the
    /// wrong extension still loads. Grayscale, palette, RGB and 16-bit images
    /// all come out as 8-bit RGBA; sources without alpha become fully opaque.
    pub fn load(path: &Path) -> Result<Self> {
        let reader = ImageReader::open(path)
            .fs_context("opening source image", path)?
            .with_guessed_format()
            .fs_context("reading source image", path)?;

        let img = reader.decode().map_err(|error| Error::Decode {
            path: path.to_path_buf(),
            error,
        })?;

        let original_color = img.color();
        if original_color != ColorType::Rgba8 {
            log::debug!("Converting {:?} source to Rgba8", original_color);
        }
        let pixels = img.into_rgba8();

        log::debug!(
            "Loaded source image: {}x{} from {}",
            pixels.width(),
            pixels.height(),
            path.display()
        );

        Ok(Self {
            path: path.to_path_buf(),
            original_color,
            pixels,
        })
    }

    /// Path the image was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Pixel format of the file before normalization.
    pub fn original_color(&self) -> ColorType {
        self.original_color
    }

    /// Normalized RGBA8 pixels.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Returns whether the source is square.
    ///
    /// Non-square sources are stretched to each target size.
    pub fn is_square(&self) -> bool {
        self.width() == self.height()
    }
}
