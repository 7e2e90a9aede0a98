//! Output locations and console reporting thresholds.

use ctx_core::defaults;
use serde::{Deserialize, Serialize};

fn default_bundle_file() -> String {
    defaults::BUNDLE_FILE.to_string()
}

fn default_store_file() -> String {
    defaults::STORE_FILE.to_string()
}

const fn default_report_threshold_bytes() -> u64 {
    defaults::REPORT_THRESHOLD_BYTES
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Bundle file, relative to the project root.
    #[serde(default = "default_bundle_file")]
    pub bundle_file: String,

    /// Setup store file, relative to the project root.
    #[serde(default = "default_store_file")]
    pub store_file: String,

    /// Largest file (in bytes) still confirmed on the console after appending.
    #[serde(default = "default_report_threshold_bytes")]
    pub report_threshold_bytes: u64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            bundle_file: default_bundle_file(),
            store_file: default_store_file(),
            report_threshold_bytes: default_report_threshold_bytes(),
        }
    }
}
