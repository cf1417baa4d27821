use derive_new::new;
use std::path::Path;

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct DatasetSpec {
    pub name: String,
    pub records: Vec<String>,
}

pub fn write_dataset(store: &Path, dataset: DatasetSpec) {
    let content = dataset
        .records
        .iter()
        .map(|record| format!("{record}\n"))
        .collect::<String>();

    std::fs::write(store.join(&dataset.name), content)
        .unwrap_or_else(|e| panic!("Failed to write dataset {}: {}", dataset.name, e));
}

pub fn read_records(store: &Path, name: &str) -> Vec<String> {
    std::fs::read_to_string(store.join(name))
        .unwrap_or_else(|e| panic!("Failed to read dataset {}: {}", name, e))
        .lines()
        .map(String::from)
        .collect()
}

pub fn write_generated_dataset(store: &Path, name: &str, records_count: usize) -> DatasetSpec {
    use fake::{Fake, faker::lorem::en::Words};

    let records = (0..records_count)
        .enumerate()
        .map(|(i, _)| {
            let words = Words(2..6).fake::<Vec<String>>().join(" ").to_uppercase();
            format!("{:<80.80}", format!("{i:04} {words}"))
        })
        .collect::<Vec<_>>();

    let dataset = DatasetSpec::new(name.to_string(), records);
    write_dataset(store, dataset.clone());

    dataset
}
