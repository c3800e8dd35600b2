//! Validation rules for publish submissions.
//!
//! Each rule reports into a [`ValidationResult`]; a submission is accepted
//! only when no rule fired. Violations carry the field path they apply to
//! (e.g. `homepage`, `tags[1].color`) and render as the user-facing message.
//!
//! ## Example
//!
//! ```rust
//! use noneflow_metadata::validation::validate_tags;
//!
//! let tags = validate_tags(r##"[{"label": "test", "color": "#ffffff"}]"##).unwrap();
//! assert_eq!(tags[0].label, "test");
//!
//! let err = validate_tags(r##"[{"label": "test", "color": "#adbcdef"}]"##).unwrap_err();
//! assert!(err.to_string().contains("标签颜色不符合十六进制颜色码规则"));
//! ```

mod common;
mod fields;
mod publish;
mod tags;

use std::fmt;

use thiserror::Error;

use crate::error::ValidationError;

pub use common::*;
pub use fields::{validate_module_name, validate_project_link, validate_required};
pub use publish::ValidationContext;
pub use tags::{check_tags, is_hex_color, validate_tags};

/// A violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// The tag list is not JSON, or not an array of `{label, color}` objects.
    #[error("标签不符合 JSON 格式")]
    TagsFormat,

    /// More tags than allowed.
    #[error("标签数量不能超过 3 个")]
    TagCount { count: usize },

    /// A tag label is too long.
    #[error("标签名称不能超过 10 个字符")]
    TagLabelLength { index: usize, label: String },

    /// A tag color is not `#RRGGBB`.
    #[error("标签颜色不符合十六进制颜色码规则")]
    TagColorFormat { index: usize, color: String },

    /// A required text field is empty.
    #[error("{label}不能为空")]
    Blank { label: &'static str },

    /// The import name is not a dotted Python identifier.
    #[error("包名 {0} 不符合规范")]
    ModuleName(String),

    /// The PyPI project name contains illegal characters.
    #[error("PyPI 项目名 {0} 不符合规范")]
    ProjectLinkFormat(String),

    /// The PyPI project does not exist.
    #[error("PyPI 项目名 {0} 不存在")]
    PackageNotFound(String),

    /// The homepage is not an absolute http(s) URL.
    #[error("项目主页 {0} 不是有效的链接")]
    InvalidUrl(String),

    /// The homepage answered with a non-success status.
    #[error("项目主页 {url} 返回状态码 {status}")]
    HomepageStatus { url: String, status: u16 },

    /// The homepage could not be reached at all.
    #[error("项目主页 {0} 无法访问")]
    HomepageUnreachable(String),

    /// The same package is already published.
    #[error("PyPI 项目名 {project_link} 加包名 {module_name} 的值与商店重复")]
    Duplicate {
        project_link: String,
        module_name: String,
    },
}

/// A violation attached to the field it was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Field path (e.g. "homepage", "tags[0].label").
    pub field: String,
    /// The rule that was violated.
    pub violation: Violation,
}

impl FieldViolation {
    /// Creates a new field violation.
    pub fn new(field: impl Into<String>, violation: Violation) -> Self {
        Self {
            field: field.into(),
            violation,
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.violation)
    }
}

/// Collected violations for one submission.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// All violations found, in check order.
    pub violations: Vec<FieldViolation>,
}

impl ValidationResult {
    /// Creates a new empty validation result.
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    /// Returns `true` if no rule fired.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Records a violation on a field.
    pub fn add(&mut self, field: impl Into<String>, violation: Violation) {
        self.violations.push(FieldViolation::new(field, violation));
    }

    /// Converts into `Ok(value)` when valid, or the aggregated error.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationError> {
        if self.violations.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError::new(self.violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_result_is_valid() {
        let mut result = ValidationResult::new();
        assert!(result.is_valid());

        result.add("tags", Violation::TagsFormat);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_into_result_error_display() {
        let mut result = ValidationResult::new();
        result.add("tags", Violation::TagCount { count: 4 });
        result.add("homepage", Violation::HomepageStatus {
            url: "https://example.com".to_string(),
            status: 404,
        });

        let err = result.into_result(()).unwrap_err();
        let display = err.to_string();
        assert!(display.starts_with("2 validation errors for PublishInfo"));
        assert!(display.contains("tags\n  标签数量不能超过 3 个"));
        assert!(display.contains("项目主页 https://example.com 返回状态码 404"));
        assert_eq!(err.first().unwrap().field, "tags");
        assert_eq!(err.messages_for("tags"), vec!["标签数量不能超过 3 个"]);
    }

    #[test]
    fn test_violation_messages() {
        assert_eq!(Violation::TagsFormat.to_string(), "标签不符合 JSON 格式");
        assert_eq!(
            Violation::Blank { label: "作者" }.to_string(),
            "作者不能为空"
        );
        assert_eq!(
            Violation::Duplicate {
                project_link: "nonebot-adapter-onebot".to_string(),
                module_name: "nonebot.adapters.onebot".to_string(),
            }
            .to_string(),
            "PyPI 项目名 nonebot-adapter-onebot 加包名 nonebot.adapters.onebot 的值与商店重复"
        );
    }
}
