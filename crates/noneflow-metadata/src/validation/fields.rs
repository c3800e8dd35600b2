//! Single-field format rules.

use std::sync::LazyLock;

use regex::Regex;

use super::common::is_blank;

/// Dotted Python import path, e.g. `nonebot.adapters.onebot`.
static MODULE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$").expect("Invalid regex")
});

/// Characters PyPI accepts in a project name.
static PROJECT_LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("Invalid regex"));

/// Returns `true` if a required text field has content.
pub fn validate_required(value: &str) -> bool {
    !is_blank(value)
}

/// Returns `true` if `module_name` is a valid Python import path.
pub fn validate_module_name(module_name: &str) -> bool {
    MODULE_NAME_REGEX.is_match(module_name)
}

/// Returns `true` if `project_link` is a syntactically valid PyPI project name.
pub fn validate_project_link(project_link: &str) -> bool {
    PROJECT_LINK_REGEX.is_match(project_link)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_module_name() {
        assert!(validate_module_name("module_name"));
        assert!(validate_module_name("nonebot.adapters.onebot"));
        assert!(validate_module_name("_private"));

        assert!(!validate_module_name(""));
        assert!(!validate_module_name("1module"));
        assert!(!validate_module_name("nonebot-adapter"));
        assert!(!validate_module_name("nonebot..adapters"));
        assert!(!validate_module_name("nonebot.adapters."));
    }

    #[test]
    fn test_validate_project_link() {
        assert!(validate_project_link("project_link"));
        assert!(validate_project_link("nonebot-adapter-onebot"));
        assert!(validate_project_link("zope.interface"));

        assert!(!validate_project_link(""));
        assert!(!validate_project_link("has space"));
        assert!(!validate_project_link("a/b"));
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("author"));
        assert!(!validate_required(""));
        assert!(!validate_required("  \n"));
    }
}
