//! Configuration for the settings panel module

use serde::Deserialize;

/// Settings panel configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PanelConfig {
    /// Deployment tier this panel serves (e.g. "Prod")
    #[serde(default = "default_tier")]
    pub tier: String,

    /// Data center of the viewing context
    #[serde(default = "default_data_center")]
    pub data_center: String,

    /// Data centers offered in the override editor
    #[serde(default = "default_available_data_centers")]
    pub available_data_centers: Vec<String>,

    /// Connection string of the backing override store
    #[serde(default = "default_connection_string")]
    pub connection_string: String,

    /// Maximum override value size in bytes
    #[serde(default = "default_max_value_len")]
    pub max_value_len: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            tier: default_tier(),
            data_center: default_data_center(),
            available_data_centers: default_available_data_centers(),
            connection_string: default_connection_string(),
            max_value_len: default_max_value_len(),
        }
    }
}

fn default_tier() -> String {
    "Dev".to_string()
}

fn default_data_center() -> String {
    "Local".to_string()
}

fn default_available_data_centers() -> Vec<String> {
    vec!["Local".to_string()]
}

fn default_connection_string() -> String {
    "localhost:6379".to_string()
}

fn default_max_value_len() -> usize {
    64 * 1024
}
