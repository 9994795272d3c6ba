//! Supporting helpers: line counting, byte formatting, safe reads, and
//! colored stderr prefixes.

use owo_colors::OwoColorize;
use std::fs;
use std::path::Path;

/// Count lines the way a newline split does: a trailing newline yields a
/// final empty line, and an empty string counts as one line.
pub fn count_lines(text: &str) -> usize {
    text.split('\n').count()
}

/// Format a byte count as `N B` below 1 KiB, otherwise `N.N KB`.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}

/// Read a file to a string, degrading any failure to absence.
pub fn read_source(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok()
}

/// File size in bytes; unreadable files report zero.
pub fn file_size(path: &Path) -> u64 {
    fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if use_colors() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn note_prefix() -> String {
    if use_colors() {
        "note:".yellow().bold().to_string()
    } else {
        "note:".to_string()
    }
}

/// Render a list of line numbers as `1, 2, 3`.
pub fn join_lines(lines: &[usize]) -> String {
    lines
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
