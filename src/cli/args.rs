//! Command line argument parsing.
//!
//! The builder takes no options: paths are fixed relative to the executable.
//! Parsing still goes through clap so `--help` and `--version` work and stray
//! arguments are rejected instead of silently ignored.

use clap::Parser;

/// Build a multi-resolution Windows icon from a PNG
#[derive(Parser, Debug)]
#[command(
    name = "icon_builder",
    version,
    about = "Build a multi-resolution Windows icon from a PNG",
    long_about = "Convert icons/original.png into icons/icon.ico with 16, 32, 48, 64, 128 and 256 px frames.

Both paths are relative to the directory containing this executable.
An existing icons/icon.ico is overwritten."
)]
pub struct Args {}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_accepted() {
        assert!(Args::try_parse_from(["icon_builder"]).is_ok());
        assert!(Args::try_parse_from(["icon_builder", "other.png"]).is_err());
    }
}
