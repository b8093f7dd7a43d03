//! Command line interface for icon_builder.

mod args;
mod output;

pub use args::Args;
pub use output::OutputManager;

use crate::builder::{BuildOutcome, IconBuilder};
use crate::config::format_sizes;
use crate::error::Result;

/// Main CLI entry point
///
/// Returns the process exit code. A missing source image is reported but is
/// not a failure. Status lines never affect the exit code.
pub fn run() -> Result<i32> {
    let _args = Args::parse_args();

    let builder = IconBuilder::from_executable_dir()?;
    let output = OutputManager::new();

    if builder.has_input() {
        let paths = builder.paths();
        status(output.info(&format!("Input: {}", paths.input.display())));
        status(output.info(&format!("Output: {}", paths.output.display())));
    }

    match builder.build()? {
        BuildOutcome::InputMissing { input } => {
            output.error(&format!("Source image not found: {}", input.display()));
        }
        BuildOutcome::Built(report) => {
            status(output.success(&format!(
                "Windows icon created: {}",
                report.paths.output.display()
            )));
            status(output.indent(&format!("Sizes: {}", format_sizes(&report.sizes))));
        }
    }

    Ok(0)
}

/// Logs a failed status write instead of failing the run.
fn status(result: std::io::Result<()>) {
    if let Err(e) = result {
        log::warn!("Failed to write status output: {}", e);
    }
}
