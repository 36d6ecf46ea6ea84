//! External converter invocation
//!
//! vgmstream-cli does all of the decoding and encoding; this module only
//! spawns it once per file and captures the outcome.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Result of converting one sound bank
#[derive(Debug, Clone)]
pub struct ConversionResult {
    /// Path to the converted output file
    pub output_path: PathBuf,
    /// Original input file path
    pub input_path: PathBuf,
    /// Whether conversion was successful
    pub success: bool,
    /// Error message if conversion failed
    pub error: Option<String>,
}

impl ConversionResult {
    fn ok(input_path: &Path, output_path: &Path) -> Self {
        Self {
            output_path: output_path.to_path_buf(),
            input_path: input_path.to_path_buf(),
            success: true,
            error: None,
        }
    }

    fn failed(input_path: &Path, output_path: &Path, error: String) -> Self {
        Self {
            output_path: output_path.to_path_buf(),
            input_path: input_path.to_path_buf(),
            success: false,
            error: Some(error),
        }
    }
}

/// Turns one sound bank into one audio file
///
/// The batch loop only sees this interface, so tests can substitute an
/// implementation that never spawns a process.
pub trait Converter {
    fn convert(&self, input_path: &Path, output_path: &Path) -> ConversionResult;
}

/// The real converter: spawns vgmstream-cli once per file
#[derive(Debug, Clone)]
pub struct VgmstreamCli {
    program: PathBuf,
}

impl VgmstreamCli {
    pub fn new(program: PathBuf) -> Self {
        Self { program }
    }
}

impl Converter for VgmstreamCli {
    fn convert(&self, input_path: &Path, output_path: &Path) -> ConversionResult {
        // -o <output> : Explicit output file path
        // <input>     : Sound bank to decode
        let result = Command::new(&self.program)
            .arg("-o")
            .arg(output_path)
            .arg(input_path)
            .output();

        match result {
            Ok(output) => {
                if output.status.success() {
                    ConversionResult::ok(input_path, output_path)
                } else {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    let error_msg = format!(
                        "{} exited with status {}: {}",
                        self.program.display(),
                        output.status,
                        stderr.lines().last().unwrap_or("Unknown error")
                    );
                    ConversionResult::failed(input_path, output_path, error_msg)
                }
            }
            Err(e) => ConversionResult::failed(
                input_path,
                output_path,
                format!("Failed to spawn {}: {}", self.program.display(), e),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_spawn_failure_is_reported() {
        let converter = VgmstreamCli::new(PathBuf::from("/nonexistent/vgmstream-cli"));
        let result = converter.convert(Path::new("in.fsb"), Path::new("out.ogg"));

        assert!(!result.success);
        assert!(result.error.unwrap().contains("Failed to spawn"));
    }

    #[cfg(unix)]
    fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn test_zero_exit_is_success() {
        let temp_dir = TempDir::new().unwrap();
        // Stand-in converter: writes its "-o" argument and exits 0
        let script = write_script(temp_dir.path(), "fake-converter", "#!/bin/sh\n: > \"$2\"\nexit 0\n");

        let input = temp_dir.path().join("break1.fsb");
        let output = temp_dir.path().join("break1.ogg");
        fs::write(&input, "fsb").unwrap();

        let converter = VgmstreamCli::new(script);
        let result = converter.convert(&input, &output);

        assert!(result.success);
        assert!(result.error.is_none());
        assert!(output.exists(), "stand-in converter should have written the output");
        assert_eq!(result.output_path, output);
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_surfaces_stderr() {
        let temp_dir = TempDir::new().unwrap();
        let script = write_script(
            temp_dir.path(),
            "failing-converter",
            "#!/bin/sh\necho 'corrupt header' >&2\nexit 1\n",
        );

        let converter = VgmstreamCli::new(script);
        let result = converter.convert(Path::new("bad.fsb"), Path::new("bad.ogg"));

        assert!(!result.success);
        let error = result.error.unwrap();
        assert!(error.contains("corrupt header"));
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_with_silent_stderr() {
        let temp_dir = TempDir::new().unwrap();
        let script = write_script(temp_dir.path(), "silent-converter", "#!/bin/sh\nexit 2\n");

        let converter = VgmstreamCli::new(script);
        let result = converter.convert(Path::new("bad.fsb"), Path::new("bad.ogg"));

        assert!(!result.success);
        assert!(result.error.unwrap().contains("Unknown error"));
    }
}
