//! ICO container encoding.
//!
//! Each frame becomes one icon directory entry; the `ico` crate picks BMP or
//! PNG storage per entry.

use crate::error::{Error, ErrorExt, Result};
use crate::icon::ResizedFrame;
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use std::io::Write;
use std::path::Path;

/// Builds an icon directory holding one entry per frame, in frame order.
///
/// Frames are consumed; their pixel buffers move into the icon images.
pub fn encode_icon(frames: Vec<ResizedFrame>) -> Result<IconDir> {
    let mut icon_dir = IconDir::new(ResourceType::Icon);

    for frame in frames {
        let (width, height) = frame.size.dimensions();
        let icon_image = IconImage::from_rgba_data(width, height, frame.pixels.into_raw());

        let entry = IconDirEntry::encode(&icon_image).map_err(|error| Error::Encode {
            size: frame.size.edge(),
            error,
        })?;
        log::debug!("Encoded {} entry ({} bytes)", frame.size, entry.data().len());
        icon_dir.add_entry(entry);
    }

    Ok(icon_dir)
}

/// Encodes `frames` and writes the container to `output`.
///
/// The container is serialized in memory first, so an encoding failure never
/// truncates an existing file. Any existing file at `output` is replaced.
pub fn write_icon(frames: Vec<ResizedFrame>, output: &Path) -> Result<()> {
    let icon_dir = encode_icon(frames)?;

    let mut buffer = Vec::new();
    write_container(&icon_dir, &mut buffer)?;

    std::fs::write(output, &buffer).fs_context("writing ICO output file", output)?;

    log::info!("Created ICO file: {} ({} bytes)", output.display(), buffer.len());
    Ok(())
}

/// Serializes `icon_dir` into `writer`.
pub fn write_container<W: Write>(icon_dir: &IconDir, writer: W) -> Result<()> {
    icon_dir.write(writer)?;
    Ok(())
}
