use crate::common::command::{
    CHANGE_DS, SOURCE_DS, common_record, dconcat_concat, populated_store_dir, record_a, record_b,
};
use crate::common::dataset::read_records;
use crate::common::parse_record;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn append_source_differences_by_default(
    populated_store_dir: TempDir,
    common_record: String,
    record_a: String,
    record_b: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = populated_store_dir;

    let output = dconcat_concat(store.path(), &[]).assert().success();
    let record = parse_record(&output.get_output().stdout);

    let expected_source = vec![common_record.clone(), record_a.clone(), record_a];
    pretty_assertions::assert_eq!(read_records(store.path(), SOURCE_DS), expected_source);
    pretty_assertions::assert_eq!(
        read_records(store.path(), CHANGE_DS),
        vec![common_record, record_b]
    );

    assert!(!record.failed);
    assert!(record.changed);
    assert_eq!(record.rc, 0);
    assert_eq!(record.src, SOURCE_DS);
    assert_eq!(record.change, CHANGE_DS);
    assert_eq!(record.merge, None);
    pretty_assertions::assert_eq!(record.stdout_lines, expected_source);

    Ok(())
}
