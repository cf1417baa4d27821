use crate::areas::session::Session;
use crate::artifacts::dataset::dataset_name::DatasetName;
use crate::artifacts::diff::report::Tag;
use colored::Colorize;

impl Session {
    /// Print the raw comparator listing for a dataset pair.
    pub fn compare(&self, source: &str, change: &str) -> anyhow::Result<()> {
        let source = DatasetName::try_parse(source)?;
        let change = DatasetName::try_parse(change)?;

        let report = self.diff_concat().compare(&source, &change)?;

        for line in report.lines() {
            match Tag::of(line) {
                Some(Tag::Inserted) => writeln!(self.writer(), "{}", line.green())?,
                Some(Tag::Deleted) => writeln!(self.writer(), "{}", line.red())?,
                None => writeln!(self.writer(), "{line}")?,
            }
        }

        Ok(())
    }
}
