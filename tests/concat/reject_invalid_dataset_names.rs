use crate::common::command::{SOURCE_DS, populated_store_dir, run_dconcat_command};
use crate::common::parse_record;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case("../outside")]
#[case("WAY.TOO.LONGQUALIFIER")]
#[case("")]
fn reject_invalid_dataset_names(
    populated_store_dir: TempDir,
    #[case] change: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = run_dconcat_command(
        populated_store_dir.path(),
        &["concat", "--src", SOURCE_DS, "--change", change],
    )
    .assert()
    .failure();
    let record = parse_record(&output.get_output().stdout);

    assert!(record.failed);
    assert!(
        record
            .stderr
            .unwrap_or_default()
            .starts_with("invalid dataset name")
    );

    Ok(())
}
