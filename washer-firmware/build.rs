//! Build script for washer-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates washer.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate washer.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=washer.toml");

    let config_path = Path::new("washer.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: washer.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds washer.toml as its configuration.           ║\n\
            ║  Please create one in the washer-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read washer.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in washer.toml                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    check_int(&config, None, "loop_period_ms", 1, 10_000, &mut errors);
    check_int(&config, Some("engine"), "fill_dwell_ms", 0, u32::MAX as i64, &mut errors);
    check_int(&config, Some("engine"), "hot_below_x10", -400, 1_000, &mut errors);
    check_int(&config, Some("engine"), "cold_above_x10", -400, 1_000, &mut errors);
    check_int(&config, Some("engine"), "max_program", 0, 29, &mut errors);
    check_int(&config, Some("input"), "debounce_ms", 0, 1_000, &mut errors);
    check_int(&config, Some("input"), "poll_interval_ms", 1, 1_000, &mut errors);
    validate_thresholds(&config, &mut errors);
    validate_outputs(&config, &mut errors);
    validate_clock(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid configuration in washer.toml                     ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=washer.toml validated successfully");
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

fn lookup<'a>(config: &'a toml::Value, section: Option<&str>, key: &str) -> Option<&'a toml::Value> {
    match section {
        Some(section) => config.get(section)?.get(key),
        None => config.get(key),
    }
}

/// Check an optional integer key lies within `min..=max`
fn check_int(
    config: &toml::Value,
    section: Option<&str>,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) {
    let name = match section {
        Some(section) => format!("[{}] {}", section, key),
        None => key.to_string(),
    };

    match lookup(config, section, key) {
        None => {}
        Some(toml::Value::Integer(v)) if (min..=max).contains(v) => {}
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("{} must be {}-{}", name, min, max));
        }
        Some(_) => errors.push(format!("{} must be an integer", name)),
    }
}

/// Hot threshold must not exceed cold threshold
fn validate_thresholds(config: &toml::Value, errors: &mut Vec<String>) {
    let hot = lookup(config, Some("engine"), "hot_below_x10").and_then(|v| v.as_integer());
    let cold = lookup(config, Some("engine"), "cold_above_x10").and_then(|v| v.as_integer());

    let hot = hot.unwrap_or(250);
    let cold = cold.unwrap_or(350);
    if hot > cold {
        errors.push("[engine] hot_below_x10 must not exceed cold_above_x10".to_string());
    }
}

fn validate_outputs(config: &toml::Value, errors: &mut Vec<String>) {
    match lookup(config, Some("outputs"), "active_high") {
        None | Some(toml::Value::Boolean(_)) => {}
        Some(_) => errors.push("[outputs] active_high must be true or false".to_string()),
    }
}

/// Clock start must be "hh:mm:ss"
fn validate_clock(config: &toml::Value, errors: &mut Vec<String>) {
    let start = match lookup(config, Some("clock"), "start") {
        None => return,
        Some(toml::Value::String(s)) => s,
        Some(_) => {
            errors.push("[clock] start must be a string".to_string());
            return;
        }
    };

    let fields: Vec<Option<u32>> = start.split(':').map(|f| f.parse().ok()).collect();
    let valid = match fields.as_slice() {
        [Some(h), Some(m), Some(s)] => *h < 24 && *m < 60 && *s < 60,
        _ => false,
    };
    if !valid {
        errors.push(format!("[clock] start '{}' is not hh:mm:ss", start));
    }
}
