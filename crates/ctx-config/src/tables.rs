//! Table catalog configuration.

use ctx_core::defaults;
use serde::{Deserialize, Serialize};

fn default_excluded() -> Vec<String> {
    defaults::to_owned_list(defaults::EXCLUDED_TABLES)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TablesConfig {
    /// Tables never offered for selection.
    #[serde(default = "default_excluded")]
    pub excluded: Vec<String>,
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            excluded: default_excluded(),
        }
    }
}
