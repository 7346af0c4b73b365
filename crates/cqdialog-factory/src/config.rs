//! Factory configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FactoryConfig {
    /// Prefix generated property names with `./`
    pub use_dot_slash_in_name: bool,
    /// Field name prefix of includes synthesized for path tabs
    pub include_field_prefix: String,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            use_dot_slash_in_name: true,
            include_field_prefix: "tab".to_string(),
        }
    }
}
