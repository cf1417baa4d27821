use crate::areas::store::DatasetStore;
use crate::artifacts::dataset::dataset_name::DatasetName;
use crate::artifacts::diff::listing::render_listing;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory dataset store
///
/// Holds datasets as record lists and records every append it receives.
/// Comparator reports can be pinned per dataset pair, and each primitive can
/// be made to fail, so the core can be exercised without any real backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    datasets: RefCell<HashMap<DatasetName, Vec<String>>>,
    reports: HashMap<(DatasetName, DatasetName), String>,
    appends: RefCell<Vec<(DatasetName, String)>>,
    fail_compare: bool,
    fail_append_at: Option<usize>,
    fail_read: bool,
    append_calls: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dataset<I, S>(self, name: &DatasetName, records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.datasets
            .borrow_mut()
            .insert(name.clone(), records.into_iter().map(Into::into).collect());
        self
    }

    /// Answer `compare(source, change)` with a fixed report.
    pub fn with_report(
        mut self,
        source: &DatasetName,
        change: &DatasetName,
        report: impl Into<String>,
    ) -> Self {
        self.reports
            .insert((source.clone(), change.clone()), report.into());
        self
    }

    pub fn failing_compare(mut self) -> Self {
        self.fail_compare = true;
        self
    }

    /// Fail the `nth` append call (1-based).
    pub fn failing_append_at(mut self, nth: usize) -> Self {
        self.fail_append_at = Some(nth);
        self
    }

    pub fn failing_read(mut self) -> Self {
        self.fail_read = true;
        self
    }

    pub fn records(&self, name: &DatasetName) -> Option<Vec<String>> {
        self.datasets.borrow().get(name).cloned()
    }

    pub fn appends(&self) -> Vec<(DatasetName, String)> {
        self.appends.borrow().clone()
    }

    fn lookup<'a>(
        datasets: &'a HashMap<DatasetName, Vec<String>>,
        name: &DatasetName,
    ) -> anyhow::Result<Vec<&'a str>> {
        datasets
            .get(name)
            .map(|records| records.iter().map(String::as_str).collect())
            .ok_or_else(|| anyhow::anyhow!("dataset {} not found", name))
    }
}

impl DatasetStore for MemoryStore {
    fn compare(&self, source: &DatasetName, change: &DatasetName) -> anyhow::Result<String> {
        if self.fail_compare {
            anyhow::bail!("comparator unavailable");
        }

        if let Some(report) = self.reports.get(&(source.clone(), change.clone())) {
            return Ok(report.clone());
        }

        let datasets = self.datasets.borrow();
        let source_records = Self::lookup(&datasets, source)?;
        let change_records = Self::lookup(&datasets, change)?;

        Ok(render_listing(source, change, &source_records, &change_records)
            .text()
            .to_string())
    }

    fn append_line(&self, target: &DatasetName, content: &str) -> anyhow::Result<()> {
        let call = self.append_calls.get() + 1;
        self.append_calls.set(call);

        if self.fail_append_at == Some(call) {
            anyhow::bail!("append rejected by store");
        }

        let mut datasets = self.datasets.borrow_mut();
        let records = datasets
            .get_mut(target)
            .ok_or_else(|| anyhow::anyhow!("dataset {} not found", target))?;

        records.push(content.to_string());
        self.appends
            .borrow_mut()
            .push((target.clone(), content.to_string()));

        Ok(())
    }

    fn read(&self, target: &DatasetName) -> anyhow::Result<String> {
        if self.fail_read {
            anyhow::bail!("read rejected by store");
        }

        let datasets = self.datasets.borrow();
        let records = datasets
            .get(target)
            .ok_or_else(|| anyhow::anyhow!("dataset {} not found", target))?;

        Ok(records.iter().map(|record| format!("{record}\n")).collect())
    }
}
