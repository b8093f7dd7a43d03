//! End-to-end runs of the compiled binary.
//!
//! The binary resolves `icons/` next to itself, so each scenario runs a copy
//! placed in a scratch directory. All scenarios live in one test to keep the
//! copies from being executed while another thread still has them open.

use assert_cmd::Command;
use ico::IconDir;
use image::{Rgb, RgbImage};
use predicates::prelude::*;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn install_binary(dir: &Path) -> PathBuf {
    let source = assert_cmd::cargo::cargo_bin("icon_builder");
    let target = dir.join(source.file_name().expect("binary has a file name"));
    fs::copy(&source, &target).expect("Failed to copy binary");
    target
}

#[test]
fn test_cli_end_to_end() {
    // Successful build
    let install_dir = TempDir::new().expect("Failed to create temp dir");
    let binary = install_binary(install_dir.path());
    let icons_dir = install_dir.path().join("icons");
    fs::create_dir(&icons_dir).unwrap();
    RgbImage::from_pixel(512, 512, Rgb([200, 100, 50]))
        .save(icons_dir.join("original.png"))
        .unwrap();

    Command::new(&binary)
        .assert()
        .success()
        .stdout(predicate::str::contains("Input: "))
        .stdout(predicate::str::contains("original.png"))
        .stdout(predicate::str::contains("Windows icon created: "))
        .stdout(predicate::str::contains(
            "Sizes: 16x16, 32x32, 48x48, 64x64, 128x128, 256x256",
        ));

    let icon_dir = IconDir::read(File::open(icons_dir.join("icon.ico")).unwrap()).unwrap();
    let sizes: Vec<u32> = icon_dir.entries().iter().map(|e| e.width()).collect();
    assert_eq!(sizes, vec![16, 32, 48, 64, 128, 256]);

    // Missing input: message names the path, exit is still clean
    let empty_dir = TempDir::new().expect("Failed to create temp dir");
    let binary = install_binary(empty_dir.path());

    Command::new(&binary)
        .assert()
        .success()
        .stderr(predicate::str::contains("Source image not found: "))
        .stderr(predicate::str::contains("original.png"));
    assert!(!empty_dir.path().join("icons").join("icon.ico").exists());

    // Undecodable input is fatal
    let broken_dir = TempDir::new().expect("Failed to create temp dir");
    let binary = install_binary(broken_dir.path());
    fs::create_dir(broken_dir.path().join("icons")).unwrap();
    fs::write(broken_dir.path().join("icons").join("original.png"), b"garbage").unwrap();

    Command::new(&binary)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Input: "))
        .stdout(predicate::str::contains("Output: "))
        .stderr(predicate::str::contains("Fatal error: failed to decode image"));

    // Unwritable stdout does not fail a build that produced the icon
    #[cfg(target_os = "linux")]
    {
        let full_dir = TempDir::new().expect("Failed to create temp dir");
        let binary = install_binary(full_dir.path());
        let icons_dir = full_dir.path().join("icons");
        fs::create_dir(&icons_dir).unwrap();
        RgbImage::from_pixel(64, 64, Rgb([1, 2, 3]))
            .save(icons_dir.join("original.png"))
            .unwrap();
        let dev_full = File::options().write(true).open("/dev/full").unwrap();

        let status = std::process::Command::new(&binary)
            .stdout(dev_full)
            .status()
            .expect("Failed to run binary");

        assert!(status.success(), "status output failure changed exit: {status:?}");
        assert!(icons_dir.join("icon.ico").exists());
    }

    // Stray arguments are rejected by clap
    Command::new(&binary).arg("other.png").assert().code(2);
    Command::new(&binary)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
