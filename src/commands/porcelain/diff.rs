use crate::areas::session::Session;
use crate::artifacts::dataset::dataset_name::DatasetName;
use crate::artifacts::diff::report::Tag;

/// Side of the comparison to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DiffSide {
    /// Records only present in the source dataset.
    #[default]
    Source,
    /// Records only present in the change dataset.
    Change,
}

impl DiffSide {
    fn tag(self) -> Tag {
        match self {
            DiffSide::Source => Tag::Inserted,
            DiffSide::Change => Tag::Deleted,
        }
    }
}

impl Session {
    /// Print the records found only on one side of the comparison.
    ///
    /// Nothing is written to any dataset.
    pub fn diff(&self, source: &str, change: &str, side: DiffSide) -> anyhow::Result<()> {
        let source = DatasetName::try_parse(source)?;
        let change = DatasetName::try_parse(change)?;

        let classified = self.diff_concat().classify(&source, &change)?;

        for line in classified.lines(side.tag()) {
            writeln!(self.writer(), "{line}")?;
        }

        Ok(())
    }
}
