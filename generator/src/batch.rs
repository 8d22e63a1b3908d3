//! Batch driver: one image per numbered checkpoint plus ad-hoc identifiers.

use crate::error::GenerateError;
use crate::generator::QrGenerator;
use log::error;
use std::ops::RangeInclusive;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    pub identifier: String,
    pub filename: String,
}

impl BatchItem {
    /// `Checkpoint_<n>` saved as `checkpoint_<n>.png`.
    pub fn checkpoint(number: u32) -> Self {
        Self {
            identifier: format!("Checkpoint_{}", number),
            filename: format!("checkpoint_{}.png", number),
        }
    }

    /// An arbitrary identifier, saved under its lowercased name.
    pub fn adhoc(identifier: &str) -> Self {
        let stem: String = identifier
            .chars()
            .map(|c| match c {
                c if c.is_ascii_alphanumeric() || c == '-' || c == '_' => c.to_ascii_lowercase(),
                _ => '_',
            })
            .collect();
        Self {
            identifier: identifier.to_string(),
            filename: format!("{}.png", stem),
        }
    }
}

pub fn plan(checkpoints: RangeInclusive<u32>, extras: &[String]) -> Vec<BatchItem> {
    checkpoints
        .map(BatchItem::checkpoint)
        .chain(extras.iter().map(|id| BatchItem::adhoc(id)))
        .collect()
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(BatchItem, GenerateError)>,
}

/// Generates every item in order.
///
/// Without `keep_going` the first failure aborts the batch and is returned.
/// With it, failures are logged and collected in the report.
pub fn run(
    generator: &QrGenerator,
    items: &[BatchItem],
    keep_going: bool,
) -> Result<BatchReport, GenerateError> {
    let mut report = BatchReport::default();
    for item in items {
        match generator.generate(&item.identifier, &item.filename) {
            Ok(path) => report.written.push(path),
            Err(err) if keep_going => {
                error!("Failed to generate QR code for '{}': {}", item.identifier, err);
                report.failed.push((item.clone(), err));
            }
            Err(err) => return Err(err),
        }
    }
    Ok(report)
}
