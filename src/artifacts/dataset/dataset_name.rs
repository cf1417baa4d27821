use crate::artifacts::dataset::{MAX_DATASET_NAME_LENGTH, QUALIFIER_REGEX};
use crate::error::DconcatError;

/// Validated sequential dataset name (e.g. `SOME.DATA.SET`)
///
/// Names are upper-cased on parse. A name is a dot-separated list of
/// qualifiers of 1 to 8 characters, 44 characters at most overall.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DatasetName(String);

impl DatasetName {
    pub fn try_parse(name: &str) -> Result<Self, DconcatError> {
        let invalid = |reason: &str| DconcatError::InvalidDatasetName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        let normalized = name.trim().to_ascii_uppercase();

        if normalized.is_empty() {
            return Err(invalid("dataset name cannot be empty"));
        }
        if normalized.len() > MAX_DATASET_NAME_LENGTH {
            return Err(invalid(&format!(
                "longer than {MAX_DATASET_NAME_LENGTH} characters"
            )));
        }

        let re = regex::Regex::new(QUALIFIER_REGEX)
            .map_err(|e| invalid(&format!("invalid qualifier regex: {e}")))?;

        if let Some(qualifier) = normalized.split('.').find(|q| !re.is_match(q)) {
            return Err(invalid(&format!("invalid qualifier '{qualifier}'")));
        }

        Ok(Self(normalized))
    }
}

impl AsRef<str> for DatasetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DatasetName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for DatasetName {
    type Err = DconcatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}
