//! Icon build orchestration.
//!
//! Runs the fixed pipeline: existence check, load & normalize, resize pass,
//! encode & write. Status output is left to the caller, which receives a
//! [`BuildOutcome`] describing what happened.

use crate::config::{ICON_SIZES, IconPaths, IconSize};
use crate::error::Result;
use crate::icon::{SourceImage, resize_frames, write_icon};
use image::ColorType;
use std::path::PathBuf;

/// Summary of a successful build.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Paths used for this build.
    pub paths: IconPaths,
    /// Sizes written to the container, in container order.
    pub sizes: Vec<IconSize>,
    /// Source dimensions before resizing.
    pub source_dimensions: (u32, u32),
    /// Source pixel format before normalization.
    pub source_color: ColorType,
}

/// Result of running the builder.
#[derive(Debug, Clone)]
pub enum BuildOutcome {
    /// The icon was written.
    Built(BuildReport),
    /// The source image does not exist; nothing was read or written.
    InputMissing {
        /// Path that was checked
        input: PathBuf,
    },
}

/// Builds `icons/icon.ico` from `icons/original.png`.
#[derive(Debug, Clone)]
pub struct IconBuilder {
    paths: IconPaths,
}

impl IconBuilder {
    /// Creates a builder for explicit paths.
    pub fn new(paths: IconPaths) -> Self {
        Self { paths }
    }

    /// Creates a builder rooted at the running executable's directory.
    pub fn from_executable_dir() -> Result<Self> {
        Ok(Self::new(IconPaths::resolve()?))
    }

    /// Paths this builder reads and writes.
    pub fn paths(&self) -> &IconPaths {
        &self.paths
    }

    /// Returns whether the source image exists as a regular file.
    pub fn has_input(&self) -> bool {
        self.paths.input.is_file()
    }

    /// Runs the build.
    ///
    /// A missing source is reported as [`BuildOutcome::InputMissing`] and leaves
    /// any existing output untouched. Decode, encode, and write failures are
    /// returned as errors.
    pub fn build(&self) -> Result<BuildOutcome> {
        let IconPaths { input, output } = &self.paths;

        if !self.has_input() {
            log::warn!("Source image not found: {}", input.display());
            return Ok(BuildOutcome::InputMissing {
                input: input.clone(),
            });
        }

        let source = SourceImage::load(input)?;
        let frames = resize_frames(&source, &ICON_SIZES);
        let sizes = frames.iter().map(|frame| frame.size).collect();
        write_icon(frames, output)?;

        Ok(BuildOutcome::Built(BuildReport {
            paths: self.paths.clone(),
            sizes,
            source_dimensions: (source.width(), source.height()),
            source_color: source.original_color(),
        }))
    }
}
