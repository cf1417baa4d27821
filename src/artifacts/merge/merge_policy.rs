use crate::artifacts::dataset::dataset_name::DatasetName;
use crate::artifacts::diff::report::ClassifiedLines;
use serde::{Deserialize, Serialize};

/// Requested direction of a concatenation without a merge target
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum MergeState {
    /// Append the source-only records to the source dataset.
    #[default]
    Default,
    /// Append the change-only records to the change dataset.
    Reverse,
}

impl std::fmt::Display for MergeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MergeState::Default => write!(f, "default"),
            MergeState::Reverse => write!(f, "reverse"),
        }
    }
}

/// Which dataset receives the classified records, and which records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergePolicy {
    OverwriteSource(DatasetName),
    OverwriteChange(DatasetName),
    OverwriteMerge(DatasetName),
}

impl MergePolicy {
    /// A merge target always wins over the requested state.
    pub fn resolve(
        source: &DatasetName,
        change: &DatasetName,
        merge: Option<&DatasetName>,
        state: MergeState,
    ) -> Self {
        match (merge, state) {
            (Some(merge), _) => MergePolicy::OverwriteMerge(merge.clone()),
            (None, MergeState::Reverse) => MergePolicy::OverwriteChange(change.clone()),
            (None, MergeState::Default) => MergePolicy::OverwriteSource(source.clone()),
        }
    }

    pub fn target(&self) -> &DatasetName {
        match self {
            MergePolicy::OverwriteSource(target)
            | MergePolicy::OverwriteChange(target)
            | MergePolicy::OverwriteMerge(target) => target,
        }
    }

    /// Records to append, in append order.
    ///
    /// A merge target receives every source record before any change record.
    pub fn select(&self, classified: ClassifiedLines) -> Vec<String> {
        let ClassifiedLines {
            source_lines,
            change_lines,
        } = classified;

        match self {
            MergePolicy::OverwriteSource(_) => source_lines,
            MergePolicy::OverwriteChange(_) => change_lines,
            MergePolicy::OverwriteMerge(_) => {
                source_lines.into_iter().chain(change_lines).collect()
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MergePolicy::OverwriteSource(_) => "overwrite-source",
            MergePolicy::OverwriteChange(_) => "overwrite-change",
            MergePolicy::OverwriteMerge(_) => "overwrite-merge",
        }
    }
}
