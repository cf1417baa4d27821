//! Invocation arguments and the result record of a concatenation
//!
//! The record keeps the field layout automation callers already consume:
//! `src`, `change`, `merge`, `state`, `stdout`, `stdout_lines`, `rc` and
//! `failed`, plus `msg` and `stderr` on failure.

use crate::artifacts::dataset::dataset_name::DatasetName;
use crate::artifacts::merge::diff_concat::{ConcatOutcome, ConcatRequest};
use crate::artifacts::merge::merge_policy::MergeState;
use crate::error::DconcatError;
use serde::{Deserialize, Serialize};

pub const RC_SUCCESS: i32 = 0;
pub const RC_FAILURE: i32 = 1;

/// Raw, unvalidated arguments as supplied by a caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConcatArgs {
    pub src: String,
    pub change: String,
    #[serde(default)]
    pub merge: Option<String>,
    #[serde(default)]
    pub state: MergeState,
}

impl ConcatArgs {
    pub fn try_into_request(&self) -> Result<ConcatRequest, DconcatError> {
        Ok(ConcatRequest::new(
            DatasetName::try_parse(&self.src)?,
            DatasetName::try_parse(&self.change)?,
            self.merge.as_deref().map(DatasetName::try_parse).transpose()?,
            self.state,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcatRecord {
    pub src: String,
    pub change: String,
    pub merge: Option<String>,
    pub state: MergeState,
    pub changed: bool,
    pub stdout: String,
    pub stdout_lines: Vec<String>,
    pub rc: i32,
    pub failed: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub msg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stderr: Option<String>,
}

impl ConcatRecord {
    pub fn succeeded(args: &ConcatArgs, outcome: &ConcatOutcome) -> Self {
        ConcatRecord {
            changed: outcome.appended > 0,
            stdout: outcome.content.clone(),
            stdout_lines: outcome.lines(),
            rc: RC_SUCCESS,
            failed: false,
            msg: None,
            stderr: None,
            ..Self::blank(args)
        }
    }

    /// The message stays the same for every failure kind; `stderr` carries
    /// the specific cause.
    pub fn failed(args: &ConcatArgs, error: &DconcatError) -> Self {
        ConcatRecord {
            rc: RC_FAILURE,
            failed: true,
            msg: Some(format!(
                "Unable to diff and concat src dataset {} to change dataset {}.",
                args.src, args.change
            )),
            stderr: Some(error.to_string()),
            ..Self::blank(args)
        }
    }

    fn blank(args: &ConcatArgs) -> Self {
        ConcatRecord {
            src: args.src.clone(),
            change: args.change.clone(),
            merge: args.merge.clone(),
            state: args.state,
            changed: false,
            stdout: String::new(),
            stdout_lines: Vec::new(),
            rc: RC_SUCCESS,
            failed: false,
            msg: None,
            stderr: None,
        }
    }
}
