//! Fixed icon layout and path resolution.
//!
//! The builder takes no input: both the source PNG and the output ICO live in an
//! `icons/` directory next to the running executable.

use crate::error::{Context, Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// Directory holding the source image and the generated icon.
pub const ICONS_DIR: &str = "icons";

/// File name of the source image inside [`ICONS_DIR`].
pub const INPUT_FILE_NAME: &str = "original.png";

/// File name of the generated icon inside [`ICONS_DIR`].
pub const OUTPUT_FILE_NAME: &str = "icon.ico";

/// Square icon dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IconSize(u32);

impl IconSize {
    /// Edge length in pixels.
    pub const fn edge(self) -> u32 {
        self.0
    }

    /// `(width, height)` pair.
    pub const fn dimensions(self) -> (u32, u32) {
        (self.0, self.0)
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// Windows icon sizes, in the order they are written to the container.
///
/// - 16x16: window title bars
/// - 32x32: Explorer standard view
/// - 48x48: Explorer large view
/// - 64x64, 128x128: extra large views
/// - 256x256: high-res icons (Vista and later)
pub const ICON_SIZES: [IconSize; 6] = [
    IconSize(16),
    IconSize(32),
    IconSize(48),
    IconSize(64),
    IconSize(128),
    IconSize(256),
];

/// Formats sizes as `16x16, 32x32, ...` for status output.
pub fn format_sizes(sizes: &[IconSize]) -> String {
    sizes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Input and output locations for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPaths {
    /// Source PNG.
    pub input: PathBuf,
    /// Generated ICO, overwritten on every successful build.
    pub output: PathBuf,
}

impl IconPaths {
    /// Derives `icons/original.png` and `icons/icon.ico` under `base_dir`.
    pub fn from_base_dir(base_dir: impl AsRef<Path>) -> Self {
        let icons_dir = base_dir.as_ref().join(ICONS_DIR);
        Self {
            input: icons_dir.join(INPUT_FILE_NAME),
            output: icons_dir.join(OUTPUT_FILE_NAME),
        }
    }

    /// Resolves paths relative to the directory of the running executable.
    pub fn resolve() -> Result<Self> {
        let exe = std::env::current_exe().map_err(|e| Error::ExecutableDir(e.to_string()))?;
        // Follow symlinks so a linked binary still finds its own icons/ directory
        let exe = exe.canonicalize().unwrap_or(exe);
        let base_dir = exe
            .parent()
            .with_context(|| format!("{} has no parent directory", exe.display()))?;

        log::debug!("Resolved base directory: {}", base_dir.display());
        Ok(Self::from_base_dir(base_dir))
    }
}
