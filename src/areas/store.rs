//! Dataset store boundary
//!
//! The diff-concatenation core only needs three primitives from whatever
//! holds the datasets: a comparator producing a tagged report, a record
//! append, and a full read. Everything behind them (allocation, record
//! formats, catalogs) belongs to the store implementation.

use crate::artifacts::dataset::dataset_name::DatasetName;
use crate::artifacts::diff::report::ContentWindow;
use derive_new::new;
use std::path::{Path, PathBuf};

pub trait DatasetStore {
    /// Compare `source` with `change` and return the comparator listing.
    fn compare(&self, source: &DatasetName, change: &DatasetName) -> anyhow::Result<String>;

    /// Append one record to the end of `target`.
    fn append_line(&self, target: &DatasetName, content: &str) -> anyhow::Result<()>;

    /// Full content of `target`.
    fn read(&self, target: &DatasetName) -> anyhow::Result<String>;
}

/// How to reach the dataset backend and how to cut records out of reports
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct StoreConfig {
    root: PathBuf,
    window: ContentWindow,
}

impl StoreConfig {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn window(&self) -> ContentWindow {
        self.window
    }
}
