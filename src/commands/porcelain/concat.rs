use crate::areas::session::Session;
use crate::artifacts::merge::concat_record::{ConcatArgs, ConcatRecord};
use crate::error::DconcatError;
use anyhow::Context;
use tracing::error;

impl Session {
    /// Diff `src` with `change`, append the differences and print the
    /// result record as JSON.
    ///
    /// Processing failures are reported inside the record (`failed`, `rc`,
    /// `msg`), not as an `Err`; only output failures are returned as errors.
    pub fn concat(&self, args: &ConcatArgs) -> anyhow::Result<ConcatRecord> {
        let record = match self.run_concat(args) {
            Ok(record) => record,
            Err(e) => {
                error!(src = %args.src, change = %args.change, kind = e.kind(), "{e}");
                ConcatRecord::failed(args, &e)
            }
        };

        let json = serde_json::to_string_pretty(&record)
            .context("Failed to serialize the result record")?;
        writeln!(self.writer(), "{json}")?;

        Ok(record)
    }

    fn run_concat(&self, args: &ConcatArgs) -> Result<ConcatRecord, DconcatError> {
        let request = args.try_into_request()?;
        let outcome = self.diff_concat().run(&request)?;

        Ok(ConcatRecord::succeeded(args, &outcome))
    }
}
