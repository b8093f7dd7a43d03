//! icon_builder - converts icons/original.png into a multi-resolution icons/icon.ico.

use icon_builder::cli;
use icon_builder::cli::OutputManager;
use std::process;

fn main() {
    env_logger::init();

    match cli::run() {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            OutputManager::new().error(&format!("Fatal error: {e}"));
            process::exit(1);
        }
    }
}
