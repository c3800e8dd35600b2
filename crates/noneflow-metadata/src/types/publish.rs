//! Publish submission types.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::tag::Tag;

/// Kind of entry being published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishType {
    /// Protocol adapter distributed on PyPI.
    Adapter,
    /// Plugin distributed on PyPI.
    Plugin,
    /// Bot project, not distributed as a package.
    Bot,
}

impl PublishType {
    /// Whether submissions of this kind carry `module_name` and `project_link`.
    pub fn has_package(&self) -> bool {
        !matches!(self, PublishType::Bot)
    }

    /// Issue-form label of the `name` field.
    pub fn name_label(&self) -> &'static str {
        match self {
            PublishType::Adapter => "协议名称",
            PublishType::Plugin => "插件名称",
            PublishType::Bot => "机器人名称",
        }
    }

    /// Issue-form label of the `desc` field.
    pub fn desc_label(&self) -> &'static str {
        match self {
            PublishType::Adapter => "协议功能",
            PublishType::Plugin => "插件功能",
            PublishType::Bot => "机器人功能",
        }
    }
}

impl fmt::Display for PublishType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishType::Adapter => write!(f, "adapter"),
            PublishType::Plugin => write!(f, "plugin"),
            PublishType::Bot => write!(f, "bot"),
        }
    }
}

impl FromStr for PublishType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adapter" => Ok(PublishType::Adapter),
            "plugin" => Ok(PublishType::Plugin),
            "bot" => Ok(PublishType::Bot),
            other => Err(format!(
                "unknown publish type '{}', expected one of: adapter, plugin, bot",
                other
            )),
        }
    }
}

/// Unvalidated field values as extracted from an issue form.
///
/// `tags` holds the JSON text of the tag list, exactly as submitted. When
/// deserializing, a tag list given inline (not as a string) is re-encoded to
/// JSON text so both forms go through the same checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSubmission {
    pub module_name: String,
    pub project_link: String,
    pub name: String,
    pub desc: String,
    pub author: String,
    pub homepage: String,
    #[serde(deserialize_with = "tags_text")]
    pub tags: String,
    pub is_official: bool,
}

fn tags_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => text,
        other => other.to_string(),
    })
}

impl Default for RawSubmission {
    fn default() -> Self {
        Self {
            module_name: String::new(),
            project_link: String::new(),
            name: String::new(),
            desc: String::new(),
            author: String::new(),
            homepage: String::new(),
            tags: "[]".to_string(),
            is_official: false,
        }
    }
}

impl RawSubmission {
    /// Builds a raw submission from a field name to value mapping.
    ///
    /// Missing fields are left empty; a missing `tags` entry means no tags.
    /// `is_official` accepts `true`/`false` in any case, and `1`/`0`.
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let get = |key: &str| fields.get(key).cloned().unwrap_or_default();
        let is_official = fields
            .get("is_official")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1"))
            .unwrap_or(false);
        let tags = fields
            .get("tags")
            .cloned()
            .unwrap_or_else(|| "[]".to_string());

        Self {
            module_name: get("module_name"),
            project_link: get("project_link"),
            name: get("name"),
            desc: get("desc"),
            author: get("author"),
            homepage: get("homepage"),
            tags,
            is_official,
        }
    }
}

/// A validated publish submission.
///
/// Only produced by [`PublishInfo::validate`]; text fields are trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishInfo {
    pub(crate) publish_type: PublishType,
    pub(crate) module_name: String,
    pub(crate) project_link: String,
    pub(crate) name: String,
    pub(crate) desc: String,
    pub(crate) author: String,
    pub(crate) homepage: String,
    pub(crate) tags: Vec<Tag>,
    pub(crate) is_official: bool,
}

impl PublishInfo {
    pub fn publish_type(&self) -> PublishType {
        self.publish_type
    }

    /// Python import name; empty for bots.
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// PyPI project name; empty for bots.
    pub fn project_link(&self) -> &str {
        &self.project_link
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn desc(&self) -> &str {
        &self.desc
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn homepage(&self) -> &str {
        &self.homepage
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn is_official(&self) -> bool {
        self.is_official
    }
}
