use crate::common::command::{
    MERGE_DS, populated_store_dir, record_a, record_b, run_dconcat_command,
};
use crate::common::dataset::read_records;
use crate::common::parse_record;
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use rstest::rstest;

#[rstest]
fn read_arguments_from_json_file(
    populated_store_dir: TempDir,
    record_a: String,
    record_b: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = populated_store_dir;
    let args_dir = TempDir::new()?;
    let args_file = args_dir.child("args.json");
    let args = serde_json::json!({
        "src": "user.emp.source",
        "change": "user.emp.change",
        "merge": "user.emp.merge",
        "state": "reverse",
    });
    args_file.write_str(&args.to_string())?;

    let args_path = args_file.path().display().to_string();

    let output = run_dconcat_command(store.path(), &["concat", "--args", args_path.as_str()])
        .assert()
        .success();
    let record = parse_record(&output.get_output().stdout);

    pretty_assertions::assert_eq!(
        read_records(store.path(), MERGE_DS),
        vec![record_a, record_b]
    );
    // the record echoes the arguments as given
    assert_eq!(record.src, "user.emp.source");
    assert_eq!(record.merge.as_deref(), Some("user.emp.merge"));

    Ok(())
}

#[rstest]
fn reject_arguments_file_with_unknown_fields(
    populated_store_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let args_dir = TempDir::new()?;
    let args_file = args_dir.child("args.json");
    args_file.write_str(r#"{"src": "A.B", "change": "C.D", "colour": "blue"}"#)?;

    let args_path = args_file.path().display().to_string();

    run_dconcat_command(
        populated_store_dir.path(),
        &["concat", "--args", args_path.as_str()],
    )
    .assert()
    .failure()
    .stderr(predicates::str::contains("Invalid arguments file"));

    Ok(())
}

#[rstest]
fn reject_explicit_state_next_to_arguments_file(
    populated_store_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = populated_store_dir;
    let args_dir = TempDir::new()?;
    let args_file = args_dir.child("args.json");
    args_file.write_str(r#"{"src": "user.emp.source", "change": "user.emp.change"}"#)?;

    let args_path = args_file.path().display().to_string();

    run_dconcat_command(
        store.path(),
        &["concat", "--args", args_path.as_str(), "--state", "reverse"],
    )
    .assert()
    .failure()
    .stderr(predicates::str::contains("cannot be used with"));

    Ok(())
}
