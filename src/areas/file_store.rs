use crate::areas::store::DatasetStore;
use crate::artifacts::dataset::dataset_name::DatasetName;
use crate::artifacts::diff::listing::render_listing;
use anyhow::Context;
use file_guard::Lock;
use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::ops::DerefMut;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Datasets kept as newline-delimited text files under a root directory
///
/// The file of a dataset is named after the dataset (`ROOT/SOME.DATA.SET`).
/// Datasets must exist before they are appended to, the same way a
/// sequential dataset has to be allocated before it is written.
#[derive(Debug)]
pub struct FileStore {
    path: Box<Path>,
}

impl FileStore {
    pub fn open(root: &Path) -> anyhow::Result<Self> {
        let path = root
            .canonicalize()
            .with_context(|| format!("dataset store {:?} is not accessible", root))?;

        if !path.is_dir() {
            anyhow::bail!("dataset store {:?} is not a directory", path);
        }

        Ok(FileStore {
            path: path.into_boxed_path(),
        })
    }

    pub fn dataset_path(&self, name: &DatasetName) -> PathBuf {
        self.path.join(name.as_ref())
    }

    fn read_records(&self, name: &DatasetName) -> anyhow::Result<String> {
        let dataset_path = self.dataset_path(name);

        std::fs::read_to_string(&dataset_path)
            .with_context(|| format!("failed to read dataset {} at {:?}", name, dataset_path))
    }
}

impl DatasetStore for FileStore {
    fn compare(&self, source: &DatasetName, change: &DatasetName) -> anyhow::Result<String> {
        let source_content = self.read_records(source)?;
        let change_content = self.read_records(change)?;

        let source_records = source_content.lines().collect::<Vec<_>>();
        let change_records = change_content.lines().collect::<Vec<_>>();

        debug!(
            %source,
            %change,
            source_records = source_records.len(),
            change_records = change_records.len(),
            "comparing datasets"
        );

        let report = render_listing(source, change, &source_records, &change_records);
        Ok(report.text().to_string())
    }

    // Holds an exclusive lock on the dataset file for the duration of a
    // single append only.
    fn append_line(&self, target: &DatasetName, content: &str) -> anyhow::Result<()> {
        let dataset_path = self.dataset_path(target);

        let mut dataset_file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&dataset_path)
            .with_context(|| format!("failed to open dataset {} at {:?}", target, dataset_path))?;
        let mut lock = file_guard::lock(&mut dataset_file, Lock::Exclusive, 0, 1)?;
        let file = lock.deref_mut();

        // keep the previous last record terminated
        let mut record = String::with_capacity(content.len() + 2);
        if file.metadata()?.len() > 0 {
            let mut last_byte = [0u8; 1];
            file.seek(SeekFrom::End(-1))?;
            file.read_exact(&mut last_byte)?;
            if last_byte[0] != b'\n' {
                record.push('\n');
            }
        }
        record.push_str(content);
        record.push('\n');

        file.write_all(record.as_bytes())
            .with_context(|| format!("failed to append to dataset {}", target))?;

        Ok(())
    }

    fn read(&self, target: &DatasetName) -> anyhow::Result<String> {
        self.read_records(target)
    }
}
