//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for noneflow
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP client configuration
    pub http: HttpConfig,

    /// PyPI lookup configuration
    pub pypi: PypiConfig,

    /// Validation behaviour
    pub validation: ValidationConfig,
}

/// HTTP client configuration used by reachability checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User agent sent with every reachability request
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: format!("noneflow/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// PyPI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PypiConfig {
    /// Base URL of the PyPI JSON API (projects are checked at `{index_url}/{name}/json`)
    pub index_url: String,
}

impl Default for PypiConfig {
    fn default() -> Self {
        Self {
            index_url: "https://pypi.org/pypi".to_string(),
        }
    }
}

impl PypiConfig {
    /// URL of the JSON document for a PyPI project
    pub fn project_url(&self, project: &str) -> String {
        format!("{}/{}/json", self.index_url.trim_end_matches('/'), project)
    }
}

/// Validation behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Whether homepage and PyPI reachability is checked over HTTP
    pub check_reachability: bool,

    /// JSON file listing already published entries, used for duplicate detection
    pub known_registry: Option<PathBuf>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            check_reachability: true,
            known_registry: None,
        }
    }
}
