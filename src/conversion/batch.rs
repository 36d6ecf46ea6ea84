//! Sequential batch conversion
//!
//! One pass over the discovered sound banks: ensure the mirrored
//! directory, run the converter, report, move on. A single file's
//! failure never aborts the batch.

use std::path::Path;

use crate::core::discover_sound_banks;

use super::output::OutputLayout;
use super::vgmstream::{ConversionResult, Converter};

/// Counters reported at the end of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files converted successfully
    pub converted: usize,
    /// Files the converter rejected
    pub failed: usize,
    /// Total bytes written to the output tree
    pub output_bytes: u64,
}

/// Convert every sound bank under the layout's source root
///
/// With `clean_output` the output root is wiped first; otherwise it is
/// created if absent and existing files are left in place. Files are
/// processed one at a time, in path order.
pub fn run_batch(
    layout: &OutputLayout,
    converter: &dyn Converter,
    clean_output: bool,
) -> Result<BatchSummary, String> {
    if clean_output {
        layout.reset()?;
    } else {
        layout.prepare()?;
    }

    let banks = discover_sound_banks(layout.source_root())?;
    log::info!(
        "Found {} sound banks under {}",
        banks.len(),
        layout.source_root().display()
    );

    let mut summary = BatchSummary::default();

    for input_path in &banks {
        let destination = match layout.destination_for(input_path) {
            Ok(d) => d,
            Err(e) => {
                report_failure(input_path, &e);
                summary.failed += 1;
                continue;
            }
        };

        // A directory we cannot create only fails this file; the
        // remaining files get their own attempt.
        if let Err(e) = layout.ensure_destination_dir(&destination) {
            report_failure(input_path, &e);
            summary.failed += 1;
            continue;
        }

        let result = converter.convert(input_path, &destination);
        report(&result);

        if result.success {
            summary.converted += 1;
            if let Ok(metadata) = std::fs::metadata(&result.output_path) {
                summary.output_bytes += metadata.len();
            }
        } else {
            summary.failed += 1;
        }
    }

    Ok(summary)
}

fn report(result: &ConversionResult) {
    if result.success {
        log::info!("Converted: {}", result.output_path.display());
    } else {
        let error = result.error.as_deref().unwrap_or("Unknown error");
        report_failure(&result.input_path, error);
    }
}

fn report_failure(input_path: &Path, error: &str) {
    log::error!("Error converting {}: {}", input_path.display(), error);
}
