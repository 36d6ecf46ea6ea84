//! Source tree scanning and sound-bank discovery
//!
//! This module provides functions for walking the source root and
//! discovering the FSB sound banks to convert.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Check if a file is an FSB sound bank based on its extension
pub fn is_sound_bank(path: &Path) -> bool {
    if let Some(ext) = path.extension() {
        ext.to_string_lossy().eq_ignore_ascii_case("fsb")
    } else {
        false
    }
}

/// Find every sound bank under `root`, sorted by path
///
/// Sorting keeps the batch order deterministic across runs and platforms.
pub fn discover_sound_banks(root: &Path) -> Result<Vec<PathBuf>, String> {
    if !root.is_dir() {
        return Err(format!("Path is not a directory: {}", root.display()));
    }

    let mut banks = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && is_sound_bank(path) {
            banks.push(path.to_path_buf());
        }
    }

    banks.sort();
    Ok(banks)
}

/// Format size in human-readable form (KB, MB, GB)
/// Uses decimal units to match Finder (1 MB = 1,000,000 bytes)
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1000;
    const MB: u64 = KB * 1000;
    const GB: u64 = MB * 1000;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
