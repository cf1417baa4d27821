use crate::common::command::{
    CHANGE_DS, SOURCE_DS, populated_store_dir, run_dconcat_command, store_dir,
};
use crate::common::dataset::{DatasetSpec, read_records, write_dataset};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case(None, 80)]
#[case(Some("20"), 20)]
fn truncate_records_to_record_width(
    store_dir: TempDir,
    #[case] record_width: Option<&str>,
    #[case] expected_width: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let long_record = "X".repeat(100);
    write_dataset(
        store_dir.path(),
        DatasetSpec::new(SOURCE_DS.to_string(), vec![long_record.clone()]),
    );
    write_dataset(store_dir.path(), DatasetSpec::new(CHANGE_DS.to_string(), vec![]));

    let mut args = vec!["concat", "--src", SOURCE_DS, "--change", CHANGE_DS];
    if let Some(width) = record_width {
        args.extend(["--record-width", width]);
    }
    run_dconcat_command(store_dir.path(), &args)
        .assert()
        .success();

    pretty_assertions::assert_eq!(
        read_records(store_dir.path(), SOURCE_DS),
        vec![long_record, "X".repeat(expected_width)]
    );

    Ok(())
}

#[rstest]
fn reject_zero_record_width(
    populated_store_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = populated_store_dir;
    let before = read_records(store.path(), SOURCE_DS);

    run_dconcat_command(
        store.path(),
        &["concat", "--src", SOURCE_DS, "--change", CHANGE_DS, "--record-width", "0"],
    )
    .assert()
    .failure()
    .code(2)
    .stderr(predicates::str::contains("--record-width"));

    pretty_assertions::assert_eq!(read_records(store.path(), SOURCE_DS), before);

    Ok(())
}
