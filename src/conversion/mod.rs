//! Sound-bank conversion
//!
//! Locates the external converter executable and drives it over the
//! discovered sound banks, mirroring the source tree under the
//! output root.

mod batch;
mod output;
mod vgmstream;

pub use batch::{BatchSummary, run_batch};
pub use output::OutputLayout;
pub use vgmstream::{ConversionResult, Converter, VgmstreamCli};

use std::path::{Path, PathBuf};

/// Name of the external converter executable
pub const CONVERTER_NAME: &str = "vgmstream-cli";

/// Locate the converter executable
///
/// An explicit override wins; otherwise every directory on PATH is
/// probed for the well-known executable name.
pub fn locate_converter(override_path: Option<&Path>) -> Result<PathBuf, String> {
    if let Some(path) = override_path {
        return verify_converter(path.to_path_buf());
    }

    if let Some(paths) = std::env::var_os("PATH") {
        for dir in std::env::split_paths(&paths) {
            let candidate = dir.join(CONVERTER_NAME);
            if candidate.is_file() {
                return verify_converter(candidate);
            }

            #[cfg(windows)]
            {
                let candidate = dir.join(format!("{}.exe", CONVERTER_NAME));
                if candidate.is_file() {
                    return verify_converter(candidate);
                }
            }
        }
    }

    Err(format!(
        "{} not found on PATH. Use --converter to specify its location.",
        CONVERTER_NAME
    ))
}

/// Verify that the converter exists and is executable
fn verify_converter(path: PathBuf) -> Result<PathBuf, String> {
    if !path.is_file() {
        return Err(format!("Converter not found at {:?}", path));
    }

    // On Unix, check the executable bits
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let metadata = std::fs::metadata(&path)
            .map_err(|e| format!("Failed to get converter metadata: {}", e))?;
        if metadata.permissions().mode() & 0o111 == 0 {
            return Err(format!("Converter at {:?} is not executable", path));
        }
    }

    Ok(path)
}
