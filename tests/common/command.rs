use crate::common::dataset::{DatasetSpec, write_dataset};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const SOURCE_DS: &str = "USER.EMP.SOURCE";
pub const CHANGE_DS: &str = "USER.EMP.CHANGE";
pub const MERGE_DS: &str = "USER.EMP.MERGE";

#[fixture]
pub fn store_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn record_a() -> String {
    format!("{:<80}", "WILLIAM            BENSON              HR124     HUMAN RESOURCES")
}

#[fixture]
pub fn record_b() -> String {
    format!("{:<80}", "TINA               STATES              AP592     ACCOUNTS PAYABLE")
}

#[fixture]
pub fn common_record() -> String {
    format!("{:<80}", "CAROL              SCHNEIDER           IT457     IT")
}

/// Source and change datasets sharing one record and differing by one
/// record each, plus an empty merge dataset.
#[fixture]
pub fn populated_store_dir(
    store_dir: TempDir,
    common_record: String,
    record_a: String,
    record_b: String,
) -> TempDir {
    write_dataset(
        store_dir.path(),
        DatasetSpec::new(SOURCE_DS.to_string(), vec![common_record.clone(), record_a]),
    );
    write_dataset(
        store_dir.path(),
        DatasetSpec::new(CHANGE_DS.to_string(), vec![common_record, record_b]),
    );
    write_dataset(store_dir.path(), DatasetSpec::new(MERGE_DS.to_string(), vec![]));

    store_dir
}

pub fn run_dconcat_command(store: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("dconcat").expect("Failed to find dconcat binary");
    cmd.env("DCONCAT_STORE", store);
    cmd.env_remove("RUST_LOG");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn dconcat_concat(store: &Path, extra_args: &[&str]) -> Command {
    let mut args = vec!["concat", "--src", SOURCE_DS, "--change", CHANGE_DS];
    args.extend_from_slice(extra_args);
    run_dconcat_command(store, &args)
}
