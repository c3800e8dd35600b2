//! Whole-submission validation.

use noneflow_core::config::PypiConfig;
use tracing::{debug, info};

use super::fields::{validate_module_name, validate_project_link, validate_required};
use super::tags::check_tags;
use super::{validate_url, ValidationResult, Violation};
use crate::error::ValidationError;
use crate::reachability::{is_success, UrlChecker};
use crate::registry::KnownEntry;
use crate::types::publish::{PublishInfo, PublishType, RawSubmission};

/// Everything a submission is checked against besides its own fields.
pub struct ValidationContext<'a> {
    checker: Option<&'a dyn UrlChecker>,
    pypi: PypiConfig,
    known: Vec<KnownEntry>,
}

impl<'a> ValidationContext<'a> {
    /// Context that checks reachability through `checker`.
    pub fn new(checker: &'a dyn UrlChecker) -> Self {
        Self {
            checker: Some(checker),
            pypi: PypiConfig::default(),
            known: Vec::new(),
        }
    }

    /// Context that skips every HTTP check.
    pub fn offline() -> Self {
        Self {
            checker: None,
            pypi: PypiConfig::default(),
            known: Vec::new(),
        }
    }

    /// Uses a different PyPI index.
    pub fn with_pypi(mut self, pypi: PypiConfig) -> Self {
        self.pypi = pypi;
        self
    }

    /// Rejects submissions matching any of these published entries.
    pub fn with_known(mut self, known: Vec<KnownEntry>) -> Self {
        self.known = known;
        self
    }

    fn check_url(&self, url: &str) -> Option<Option<u16>> {
        self.checker.map(|checker| checker.get(url))
    }
}

impl PublishInfo {
    /// Validates a raw submission.
    ///
    /// Fields are checked in order `module_name`, `project_link`, `name`,
    /// `desc`, `author`, `homepage`, `tags`, and every violation is reported.
    /// Reachability is only checked for fields that passed their format rule.
    pub fn validate(
        publish_type: PublishType,
        raw: &RawSubmission,
        ctx: &ValidationContext<'_>,
    ) -> Result<PublishInfo, ValidationError> {
        info!(%publish_type, name = %raw.name.trim(), "validating submission");
        let mut result = ValidationResult::new();

        let (module_name, project_link) = if publish_type.has_package() {
            let module_name = raw.module_name.trim().to_string();
            let project_link = raw.project_link.trim().to_string();
            check_package(&module_name, &project_link, ctx, &mut result);
            (module_name, project_link)
        } else {
            (String::new(), String::new())
        };

        let name = check_required("name", publish_type.name_label(), &raw.name, &mut result);
        let desc = check_required("desc", publish_type.desc_label(), &raw.desc, &mut result);
        let author = check_required("author", "作者", &raw.author, &mut result);

        let homepage = raw.homepage.trim().to_string();
        check_homepage(&homepage, ctx, &mut result);

        let tags = check_tags(&raw.tags, &mut result).unwrap_or_default();

        if !result.is_valid() {
            debug!(violations = result.violations.len(), "submission rejected");
        }

        result.into_result(PublishInfo {
            publish_type,
            module_name,
            project_link,
            name,
            desc,
            author,
            homepage,
            tags,
            is_official: raw.is_official,
        })
    }
}

fn check_required(
    field: &str,
    label: &'static str,
    value: &str,
    result: &mut ValidationResult,
) -> String {
    if !validate_required(value) {
        debug!(field, "required field is blank");
        result.add(field, Violation::Blank { label });
    }
    value.trim().to_string()
}

fn check_package(
    module_name: &str,
    project_link: &str,
    ctx: &ValidationContext<'_>,
    result: &mut ValidationResult,
) {
    if !validate_module_name(module_name) {
        debug!(module_name, "invalid module name");
        result.add("module_name", Violation::ModuleName(module_name.to_string()));
    }

    if !validate_project_link(project_link) {
        debug!(project_link, "invalid PyPI project name");
        result.add(
            "project_link",
            Violation::ProjectLinkFormat(project_link.to_string()),
        );
        return;
    }

    if let Some(status) = ctx.check_url(&ctx.pypi.project_url(project_link)) {
        if !is_success(status) {
            debug!(project_link, ?status, "PyPI project not found");
            result.add(
                "project_link",
                Violation::PackageNotFound(project_link.to_string()),
            );
        }
    }

    if ctx
        .known
        .iter()
        .any(|entry| entry.matches(module_name, project_link))
    {
        debug!(module_name, project_link, "package already published");
        result.add(
            "project_link",
            Violation::Duplicate {
                project_link: project_link.to_string(),
                module_name: module_name.to_string(),
            },
        );
    }
}

fn check_homepage(homepage: &str, ctx: &ValidationContext<'_>, result: &mut ValidationResult) {
    if !validate_url(homepage) {
        debug!(homepage, "homepage is not a valid URL");
        result.add("homepage", Violation::InvalidUrl(homepage.to_string()));
        return;
    }

    match ctx.check_url(homepage) {
        Some(Some(status)) if !is_success(Some(status)) => {
            debug!(homepage, status, "homepage returned error status");
            result.add(
                "homepage",
                Violation::HomepageStatus {
                    url: homepage.to_string(),
                    status,
                },
            );
        }
        Some(None) => {
            debug!(homepage, "homepage unreachable");
            result.add("homepage", Violation::HomepageUnreachable(homepage.to_string()));
        }
        _ => {}
    }
}
