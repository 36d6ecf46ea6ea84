//! Output tree management
//!
//! Maps each source file to a mirrored path under the output root and
//! owns the output root's lifecycle.

use std::fs;
use std::path::{Path, PathBuf};

/// Extension of the audio files written by the converter
pub const OUTPUT_EXTENSION: &str = "ogg";

/// Mirrors the source tree under the output root
#[derive(Debug, Clone)]
pub struct OutputLayout {
    source_root: PathBuf,
    output_root: PathBuf,
}

impl OutputLayout {
    pub fn new(source_root: PathBuf, output_root: PathBuf) -> Self {
        Self {
            source_root,
            output_root,
        }
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// Get the output root (used in tests)
    #[allow(dead_code)]
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Delete the output root and recreate it empty
    ///
    /// A run after reset never contains stale files from a previous
    /// batch; anything placed in the output tree by hand is lost too.
    pub fn reset(&self) -> Result<(), String> {
        if self.output_root.exists() {
            fs::remove_dir_all(&self.output_root)
                .map_err(|e| format!("Failed to clean output directory: {}", e))?;
        }

        fs::create_dir_all(&self.output_root)
            .map_err(|e| format!("Failed to create output directory: {}", e))?;

        Ok(())
    }

    /// Create the output root if absent, leaving existing files alone
    pub fn prepare(&self) -> Result<(), String> {
        fs::create_dir_all(&self.output_root)
            .map_err(|e| format!("Failed to create output directory: {}", e))
    }

    /// Map a source file to its mirrored output path
    ///
    /// The directory structure relative to the source root is preserved
    /// and the extension is swapped for the target audio extension.
    pub fn destination_for(&self, input_path: &Path) -> Result<PathBuf, String> {
        let relative = input_path.strip_prefix(&self.source_root).map_err(|_| {
            format!(
                "{} is not under the source root {}",
                input_path.display(),
                self.source_root.display()
            )
        })?;

        let mut destination = self.output_root.join(relative);
        destination.set_extension(OUTPUT_EXTENSION);
        Ok(destination)
    }

    /// Create the destination's parent directory if absent
    ///
    /// Safe to call repeatedly for files sharing a directory.
    pub fn ensure_destination_dir(&self, destination: &Path) -> Result<(), String> {
        if let Some(parent) = destination.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| format!("Failed to create destination directory: {}", e))?;
            }
        }

        Ok(())
    }
}
