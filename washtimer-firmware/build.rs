//! Build script for washtimer-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates timer.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use washtimer_core::config::TimerConfig;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate timer.toml at compile time
///
/// Checked through serde and again with the no_std parser the firmware
/// runs at boot.
fn validate_config() {
    println!("cargo:rerun-if-changed=timer.toml");

    let config_path = Path::new("timer.toml");

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read timer.toml", &e.to_string()),
    };

    let config: TimerConfig = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => fail("Invalid timer.toml", &e.to_string()),
    };

    if let Err(e) = config.validate() {
        fail("Invalid timer configuration", &format!("{:?}", e));
    }

    if let Err(e) = washtimer_core::config::parse_config(&content) {
        fail("timer.toml rejected by the firmware parser", &format!("{:?}", e));
    }

    println!("cargo:warning=timer.toml validated successfully");
}

/// Abort the build with a boxed error message
fn fail(title: &str, detail: &str) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(detail)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
