//! Terminal output helpers for the Treenav CLI
//!
//! Stdout carries the rendered payload; everything advisory goes to
//! stderr so pipelines stay clean.

use std::path::Path;

use treenav::config::ConfigWarning;

pub fn print_error(err: &anyhow::Error) {
    eprintln!("✗ {err:#}");
}

pub fn print_failure(message: &str) {
    eprintln!("✗ {message}");
}

pub fn print_warning(message: &str) {
    eprintln!("⚠ {message}");
}

pub fn print_success(message: &str) {
    eprintln!("✓ {message}");
}

pub fn print_detail(message: &str) {
    eprintln!("  {message}");
}

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }
}
