#![allow(dead_code)]

pub mod command;
pub mod dataset;

use dconcat::artifacts::merge::concat_record::ConcatRecord;

/// Parse the JSON result record printed by `dconcat concat`.
pub fn parse_record(stdout: &[u8]) -> ConcatRecord {
    serde_json::from_slice(stdout).unwrap_or_else(|e| {
        panic!(
            "Failed to parse result record: {}\n{}",
            e,
            String::from_utf8_lossy(stdout)
        )
    })
}
