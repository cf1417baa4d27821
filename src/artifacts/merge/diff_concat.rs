//! Diff concatenation core
//!
//! One invocation runs four steps against a [`DatasetStore`]:
//!
//! 1. compare the source with the change dataset (one comparator call)
//! 2. classify the report into source-only and change-only records
//! 3. append the records selected by the resolved [`MergePolicy`], one
//!    append per record, in order
//! 4. read back the whole effective target
//!
//! The first failure ends the invocation. Appends already performed are not
//! rolled back, so a failed write can leave a partially merged target.
//! Concurrent invocations against the same target are not serialized here.

use crate::areas::store::DatasetStore;
use crate::artifacts::dataset::dataset_name::DatasetName;
use crate::artifacts::diff::report::{ClassifiedLines, ComparisonReport, ContentWindow};
use crate::artifacts::merge::merge_policy::{MergePolicy, MergeState};
use crate::error::DconcatError;
use derive_new::new;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ConcatRequest {
    pub source: DatasetName,
    pub change: DatasetName,
    pub merge: Option<DatasetName>,
    pub state: MergeState,
}

impl ConcatRequest {
    pub fn policy(&self) -> MergePolicy {
        MergePolicy::resolve(&self.source, &self.change, self.merge.as_ref(), self.state)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcatOutcome {
    pub policy: MergePolicy,
    pub appended: usize,
    /// Full content of the effective target after the appends.
    pub content: String,
}

impl ConcatOutcome {
    pub fn target(&self) -> &DatasetName {
        self.policy.target()
    }

    pub fn lines(&self) -> Vec<String> {
        self.content.lines().map(String::from).collect()
    }
}

pub struct DiffConcat<'s> {
    store: &'s dyn DatasetStore,
    window: ContentWindow,
}

impl<'s> DiffConcat<'s> {
    pub fn new(store: &'s dyn DatasetStore) -> Self {
        DiffConcat {
            store,
            window: ContentWindow::default(),
        }
    }

    pub fn with_window(mut self, window: ContentWindow) -> Self {
        self.window = window;
        self
    }

    pub fn compare(
        &self,
        source: &DatasetName,
        change: &DatasetName,
    ) -> Result<ComparisonReport, DconcatError> {
        self.store
            .compare(source, change)
            .map(ComparisonReport::new)
            .map_err(|e| DconcatError::ComparisonFailed {
                source_name: source.to_string(),
                change_name: change.to_string(),
                reason: format!("{e:#}"),
            })
    }

    pub fn classify(
        &self,
        source: &DatasetName,
        change: &DatasetName,
    ) -> Result<ClassifiedLines, DconcatError> {
        Ok(self.compare(source, change)?.classify(self.window))
    }

    pub fn run(&self, request: &ConcatRequest) -> Result<ConcatOutcome, DconcatError> {
        let classified = self.classify(&request.source, &request.change)?;

        let policy = request.policy();
        let target = policy.target();
        let records = policy.select(classified);

        info!(
            policy = policy.label(),
            %target,
            records = records.len(),
            "appending differences"
        );
        if records.is_empty() {
            warn!(%target, "no differences to append");
        }

        for (position, record) in records.iter().enumerate() {
            self.store
                .append_line(target, record)
                .map_err(|e| DconcatError::WriteFailed {
                    target: target.to_string(),
                    record: position + 1,
                    reason: format!("{e:#}"),
                })?;
            debug!(%target, record = position + 1, "appended record");
        }

        let content = self
            .store
            .read(target)
            .map_err(|e| DconcatError::ReadFailed {
                target: target.to_string(),
                reason: format!("{e:#}"),
            })?;

        Ok(ConcatOutcome {
            appended: records.len(),
            policy,
            content,
        })
    }
}
