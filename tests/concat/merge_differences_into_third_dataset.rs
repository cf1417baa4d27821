use crate::common::command::{
    CHANGE_DS, MERGE_DS, SOURCE_DS, common_record, dconcat_concat, populated_store_dir, record_a,
    record_b,
};
use crate::common::dataset::read_records;
use crate::common::parse_record;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn merge_differences_into_third_dataset(
    populated_store_dir: TempDir,
    common_record: String,
    record_a: String,
    record_b: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = populated_store_dir;

    let output = dconcat_concat(store.path(), &["--merge", MERGE_DS])
        .assert()
        .success();
    let record = parse_record(&output.get_output().stdout);

    let expected_merge = vec![record_a.clone(), record_b.clone()];
    pretty_assertions::assert_eq!(read_records(store.path(), MERGE_DS), expected_merge);
    pretty_assertions::assert_eq!(
        read_records(store.path(), SOURCE_DS),
        vec![common_record.clone(), record_a]
    );
    pretty_assertions::assert_eq!(
        read_records(store.path(), CHANGE_DS),
        vec![common_record, record_b]
    );

    assert_eq!(record.merge.as_deref(), Some(MERGE_DS));
    pretty_assertions::assert_eq!(record.stdout_lines, expected_merge);

    Ok(())
}
