//! PNG to ICO conversion.
//!
//! The pipeline is split the same way the data flows:
//!
//! | Step | Module | Output |
//! |------|--------|--------|
//! | Load & normalize | [`source`] | [`SourceImage`] (RGBA8) |
//! | Resize pass | [`resize`] | one [`ResizedFrame`] per target size |
//! | Encode & write | [`encode`] | ICO container on disk |

pub mod encode;
pub mod resize;
pub mod source;

pub use encode::{encode_icon, write_container, write_icon};
pub use resize::{ResizedFrame, resize_frames};
pub use source::SourceImage;
