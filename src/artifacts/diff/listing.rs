use crate::artifacts::dataset::dataset_name::DatasetName;
use crate::artifacts::diff::diff_algorithm::{Edit, MyersDiff};
use crate::artifacts::diff::report::{ComparisonReport, Tag};

pub const LISTING_TITLE: &str = "DCONCAT COMPARE LISTING";

/// Render a tagged comparator listing for two datasets.
///
/// The change dataset is diffed against the source dataset: records only in
/// the source are tagged `I - `, records only in the change dataset `D - `.
/// Header and summary lines never carry a tag.
pub fn render_listing(
    source: &DatasetName,
    change: &DatasetName,
    source_records: &[&str],
    change_records: &[&str],
) -> ComparisonReport {
    let mut lines = vec![
        LISTING_TITLE.to_string(),
        format!("NEW: {source}"),
        format!("OLD: {change}"),
        String::new(),
    ];

    let (mut inserted, mut deleted) = (0, 0);
    for edit in MyersDiff::new(change_records, source_records).changes() {
        let (tag, record) = match edit {
            Edit::Insert(record) => {
                inserted += 1;
                (Tag::Inserted, record)
            }
            Edit::Delete(record) => {
                deleted += 1;
                (Tag::Deleted, record)
            }
            Edit::Equal(_) => continue,
        };
        lines.push(format!("{}{}", tag.prefix(), record));
    }

    lines.push(String::new());
    lines.push(format!("SUMMARY: {inserted} INSERTED, {deleted} DELETED"));

    ComparisonReport::new(lines.join("\n"))
}
