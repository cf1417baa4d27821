use crate::areas::session::Session;
use crate::artifacts::dataset::dataset_name::DatasetName;
use anyhow::Context;

impl Session {
    pub fn print(&self, dataset: &str) -> anyhow::Result<()> {
        let dataset = DatasetName::try_parse(dataset)?;

        let content = self
            .store()
            .read(&dataset)
            .with_context(|| format!("Unable to print dataset {dataset}"))?;

        write!(self.writer(), "{content}")?;

        Ok(())
    }
}
