pub mod dataset_name;

pub const MAX_DATASET_NAME_LENGTH: usize = 44;
pub const QUALIFIER_REGEX: &str = r"^[A-Z#@$][A-Z0-9#@$-]{0,7}$";
