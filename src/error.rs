//! Error kinds raised by the diff-concatenation core

use thiserror::Error;

/// Terminal failures of a single invocation.
///
/// None of these are retried. The first one raised aborts the remaining
/// steps; records appended before a `WriteFailed` stay in the target.
#[derive(Error, Debug)]
pub enum DconcatError {
    /// The comparator could not produce a report for the pair.
    #[error("comparison of {source_name} with {change_name} failed: {reason}")]
    ComparisonFailed {
        source_name: String,
        change_name: String,
        reason: String,
    },

    /// Appending a record to the target dataset failed.
    #[error("append of record {record} to {target} failed: {reason}")]
    WriteFailed {
        target: String,
        /// 1-based position of the record in the append sequence.
        record: usize,
        reason: String,
    },

    /// Reading back the effective target failed.
    #[error("read of {target} failed: {reason}")]
    ReadFailed { target: String, reason: String },

    #[error("invalid dataset name '{name}': {reason}")]
    InvalidDatasetName { name: String, reason: String },
}

impl DconcatError {
    /// Short machine-readable label of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            DconcatError::ComparisonFailed { .. } => "comparison_failed",
            DconcatError::WriteFailed { .. } => "write_failed",
            DconcatError::ReadFailed { .. } => "read_failed",
            DconcatError::InvalidDatasetName { .. } => "invalid_dataset_name",
        }
    }
}
