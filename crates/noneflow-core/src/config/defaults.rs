//! Default configuration values

use crate::error::ConfigError;

use super::types::Config;

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "noneflow.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "noneflow.yaml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".noneflow.toml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ALT_CONFIG_FILE,
        ".noneflow.yaml",
    ]
}

/// Generate default configuration TOML
pub fn default_config_toml() -> Result<String, ConfigError> {
    let body = toml::to_string_pretty(&Config::default())?;
    Ok(format!("{}\n{}", CONFIG_HEADER, body))
}

const CONFIG_HEADER: &str = "# noneflow configuration
# Controls how publish submissions are validated.
";
