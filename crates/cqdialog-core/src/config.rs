//! Generator configuration

use serde::{Deserialize, Serialize};

use cqdialog_factory::FactoryConfig;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Prefix generated property names with `./`
    pub use_dot_slash_in_name: bool,
    /// Field name prefix of includes synthesized for path tabs
    pub include_field_prefix: String,
    /// Seed the registry with the standard widgets
    pub standard_widgets: bool,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        if config.include_field_prefix.is_empty() {
            return Err(CoreError::Config(
                "includeFieldPrefix cannot be empty".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn factory_config(&self) -> FactoryConfig {
        FactoryConfig {
            use_dot_slash_in_name: self.use_dot_slash_in_name,
            include_field_prefix: self.include_field_prefix.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let factory = FactoryConfig::default();

        Self {
            use_dot_slash_in_name: factory.use_dot_slash_in_name,
            include_field_prefix: factory.include_field_prefix,
            standard_widgets: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.use_dot_slash_in_name);
        assert!(config.standard_widgets);
        assert_eq!(config.factory_config(), FactoryConfig::default());
    }

    #[test]
    fn test_from_json_partial() {
        let config = Config::from_json(r#"{ "useDotSlashInName": false }"#).unwrap();
        assert!(!config.use_dot_slash_in_name);
        assert_eq!(config.include_field_prefix, "tab");
        assert!(config.standard_widgets);
    }

    #[test]
    fn test_from_json_rejects_empty_prefix() {
        assert!(matches!(
            Config::from_json(r#"{ "includeFieldPrefix": "" }"#),
            Err(CoreError::Config(_))
        ));
        assert!(matches!(
            Config::from_json("{"),
            Err(CoreError::Serialization(_))
        ));
    }
}
