//! Already-published entries, used to reject duplicate submissions.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{MetadataError, Result};

/// A published adapter or plugin, identified by its package.
///
/// Extra keys in the registry file (name, desc, tags, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownEntry {
    pub module_name: String,
    pub project_link: String,
}

impl KnownEntry {
    /// Creates a new entry.
    pub fn new(module_name: impl Into<String>, project_link: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            project_link: project_link.into(),
        }
    }

    /// Whether this entry names the same package.
    pub fn matches(&self, module_name: &str, project_link: &str) -> bool {
        self.module_name == module_name && self.project_link == project_link
    }
}

/// Loads a registry file: a JSON array of objects with `module_name` and `project_link`.
pub fn load_known_registry(path: &Path) -> Result<Vec<KnownEntry>> {
    info!(path = %path.display(), "loading known registry");
    let content = std::fs::read_to_string(path)?;
    let entries: Vec<KnownEntry> = serde_json::from_str(&content).map_err(|e| {
        MetadataError::InvalidFormat(format!("{}: {}", path.display(), e))
    })?;
    debug!(count = entries.len(), "known registry loaded");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_known_registry() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("adapters.json");
        std::fs::write(
            &path,
            r#"[
                {
                    "module_name": "nonebot.adapters.onebot.v11",
                    "project_link": "nonebot-adapter-onebot",
                    "name": "OneBot V11",
                    "tags": []
                }
            ]"#,
        )
        .unwrap();

        let entries = load_known_registry(&path).unwrap();
        assert_eq!(
            entries,
            vec![KnownEntry::new(
                "nonebot.adapters.onebot.v11",
                "nonebot-adapter-onebot"
            )]
        );
        assert!(entries[0].matches("nonebot.adapters.onebot.v11", "nonebot-adapter-onebot"));
        assert!(!entries[0].matches("nonebot.adapters.onebot.v12", "nonebot-adapter-onebot"));
    }

    #[test]
    fn test_load_known_registry_invalid() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("adapters.json");
        std::fs::write(&path, "{}").unwrap();

        let err = load_known_registry(&path).unwrap_err();
        assert!(matches!(err, MetadataError::InvalidFormat(_)));
    }

    #[test]
    fn test_load_known_registry_missing() {
        let temp = TempDir::new().unwrap();
        let err = load_known_registry(&temp.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, MetadataError::Io(_)));
    }
}
