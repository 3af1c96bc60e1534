//! Build script for pulselink-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates link.toml at compile time
//! - Generates the link configuration constants compiled into the firmware

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Settings read from link.toml
struct LinkToml {
    baudrate: u32,
    whole_frame: bool,
    report_overrun: bool,
    echo_period: bool,
    boot_period: u16,
    divider: u8,
    active_low: bool,
}

fn main() {
    setup_linker();
    let config = validate_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
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
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate link.toml configuration at compile time
fn validate_config() -> LinkToml {
    println!("cargo:rerun-if-changed=link.toml");

    let config_path = Path::new("link.toml");
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read link.toml", &[e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in link.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let mut errors = Vec::new();

    let baudrate = integer(&config, "uart", "baudrate", 9600, &mut errors);
    if !(300..=921_600).contains(&baudrate) {
        errors.push(format!("[uart] baudrate must be 300-921600, got {}", baudrate));
    }

    let policy = match lookup(&config, "link", "consume_policy") {
        None => "marker-only".to_string(),
        Some(toml::Value::String(s)) => s.clone(),
        Some(_) => {
            errors.push("[link] consume_policy must be a string".to_string());
            "marker-only".to_string()
        }
    };
    if !["marker-only", "whole-frame"].contains(&policy.as_str()) {
        errors.push("[link] consume_policy must be 'marker-only' or 'whole-frame'".to_string());
    }

    let report_overrun = boolean(&config, "link", "report_overrun", true, &mut errors);
    let echo_period = boolean(&config, "link", "echo_period", true, &mut errors);

    let boot_period = integer(&config, "pulse", "boot_period", 2000, &mut errors);
    if !(0..=i64::from(u16::MAX)).contains(&boot_period) {
        errors.push(format!("[pulse] boot_period must be 0-65535, got {}", boot_period));
    }
    let divider = integer(&config, "pulse", "divider", 125, &mut errors);
    if !(1..=255).contains(&divider) {
        errors.push(format!("[pulse] divider must be 1-255, got {}", divider));
    }

    let active_low = boolean(&config, "output", "active_low", false, &mut errors);

    if !errors.is_empty() {
        fail("Invalid link configuration", &errors);
    }

    println!("cargo:warning=link.toml validated successfully");

    LinkToml {
        baudrate: baudrate as u32,
        whole_frame: policy == "whole-frame",
        report_overrun,
        echo_period,
        boot_period: boot_period as u16,
        divider: divider as u8,
        active_low,
    }
}

/// Write link_config.rs into OUT_DIR
fn generate_config(config: &LinkToml) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("link_config.rs")).unwrap();

    writeln!(f, "// Generated from link.toml").unwrap();
    writeln!(f, "pub const UART_BAUDRATE: u32 = {};", config.baudrate).unwrap();
    writeln!(f, "pub const WHOLE_FRAME: bool = {};", config.whole_frame).unwrap();
    writeln!(f, "pub const REPORT_OVERRUN: bool = {};", config.report_overrun).unwrap();
    writeln!(f, "pub const ECHO_PERIOD: bool = {};", config.echo_period).unwrap();
    writeln!(f, "pub const BOOT_PERIOD: u16 = {};", config.boot_period).unwrap();
    writeln!(f, "pub const PWM_DIVIDER: u8 = {};", config.divider).unwrap();
    writeln!(f, "pub const OUTPUT_ACTIVE_LOW: bool = {};", config.active_low).unwrap();
}

fn lookup<'a>(config: &'a toml::Value, section: &str, key: &str) -> Option<&'a toml::Value> {
    config.get(section).and_then(|s| s.get(key))
}

fn integer(
    config: &toml::Value,
    section: &str,
    key: &str,
    default: i64,
    errors: &mut Vec<String>,
) -> i64 {
    match lookup(config, section, key) {
        None => default,
        Some(toml::Value::Integer(n)) => *n,
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            default
        }
    }
}

fn boolean(
    config: &toml::Value,
    section: &str,
    key: &str,
    default: bool,
    errors: &mut Vec<String>,
) -> bool {
    match lookup(config, section, key) {
        None => default,
        Some(toml::Value::Boolean(b)) => *b,
        Some(_) => {
            errors.push(format!("[{}] {} must be true or false", section, key));
            default
        }
    }
}

/// Abort the build with a boxed error message
fn fail(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        lines
            .iter()
            .map(|line| {
                let line = if line.chars().count() > 62 {
                    format!("{}...", line.chars().take(59).collect::<String>())
                } else {
                    line.clone()
                };
                format!("║  • {:<62} ║", line)
            })
            .collect::<Vec<_>>()
            .join("\n")
    );
}
