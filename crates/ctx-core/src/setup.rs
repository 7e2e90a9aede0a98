use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named, reusable selection of tables and files.
///
/// Identity is `name`: saving a setup whose name already exists in the store
/// replaces the old record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Setup {
    pub name: String,
    #[serde(default)]
    pub tables: Vec<String>,
    #[serde(default)]
    pub files: Vec<String>,
}

impl Setup {
    #[must_use]
    pub fn new(name: impl Into<String>, tables: Vec<String>, files: Vec<String>) -> Self {
        Self {
            name: name.into(),
            tables,
            files,
        }
    }
}

/// Find a setup by name.
#[must_use]
pub fn find<'a>(setups: &'a [Setup], name: &str) -> Option<&'a Setup> {
    setups.iter().find(|setup| setup.name == name)
}
