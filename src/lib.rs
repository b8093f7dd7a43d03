//! # icon_builder
//!
//! Builds a multi-resolution Windows icon from a single PNG.
//!
//! The source is read from `icons/original.png` next to the executable, resized
//! with Lanczos3 to 16, 32, 48, 64, 128 and 256 px, and written as one ICO
//! container to `icons/icon.ico`.
//!
//! ## Usage
//!
//! ```no_run
//! use icon_builder::{BuildOutcome, IconBuilder, IconPaths};
//!
//! # fn main() -> icon_builder::Result<()> {
//! let builder = IconBuilder::new(IconPaths::from_base_dir("assets"));
//! match builder.build()? {
//!     BuildOutcome::Built(report) => println!("wrote {}", report.paths.output.display()),
//!     BuildOutcome::InputMissing { input } => eprintln!("missing {}", input.display()),
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod icon;

pub use builder::{BuildOutcome, BuildReport, IconBuilder};
pub use config::{ICON_SIZES, IconPaths, IconSize};
pub use error::{Error, Result};
