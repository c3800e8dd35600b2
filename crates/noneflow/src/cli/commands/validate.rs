//! Validate command

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use console::style;
use tracing::info;

use noneflow_core::config::load_config_or_default;
use noneflow_metadata::{
    load_known_registry, PublishInfo, PublishType, RawSubmission, ReqwestChecker,
    ValidationContext, ValidationError,
};

use crate::cli::{output, Cli, OutputFormat};
use crate::exit_codes;

/// Validate a publish submission
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Kind of submission (adapter, plugin or bot)
    #[arg(short = 't', long = "type")]
    pub publish_type: PublishType,

    /// Submission fields as a JSON or YAML mapping (`tags` as a list or its JSON text)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Skip homepage and PyPI reachability checks
    #[arg(long)]
    pub offline: bool,

    /// Registry of published entries for duplicate detection (overrides config)
    #[arg(long)]
    pub known: Option<PathBuf>,
}

impl ValidateCommand {
    /// Execute the validate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            publish_type = %self.publish_type,
            input = %self.input.display(),
            offline = self.offline,
            "executing validate command"
        );
        let cwd = std::env::current_dir()?;
        let (config, config_path) = match load_config_or_default(&cwd) {
            Ok(loaded) => loaded,
            Err(e) => {
                eprintln!("{} Failed to load config: {:#}", style("✗").red(), e);
                std::process::exit(exit_codes::CONFIG_ERROR);
            }
        };

        let raw = read_submission(&self.input)?;

        let known = match self
            .known
            .as_ref()
            .or(config.validation.known_registry.as_ref())
        {
            Some(path) => load_known_registry(path)?,
            None => Vec::new(),
        };

        let checker = if self.offline || !config.validation.check_reachability {
            None
        } else {
            Some(ReqwestChecker::new(&config.http)?)
        };
        let ctx = match &checker {
            Some(checker) => ValidationContext::new(checker),
            None => ValidationContext::offline(),
        }
        .with_pypi(config.pypi.clone())
        .with_known(known);

        let outcome = PublishInfo::validate(self.publish_type, &raw, &ctx);

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&json_report(&outcome))?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    print_text_report(&outcome, config_path.as_deref(), cli.verbose);
                }
            }
        }

        if outcome.is_err() {
            std::process::exit(exit_codes::VALIDATION_ERROR);
        }

        Ok(())
    }
}

/// Reads a submission mapping, choosing YAML for `.yaml`/`.yml` files and JSON otherwise.
fn read_submission(path: &Path) -> anyhow::Result<RawSubmission> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read submission {}", path.display()))?;

    let is_yaml = path
        .extension()
        .is_some_and(|e| e == "yaml" || e == "yml");
    let raw = if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("invalid YAML submission {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON submission {}", path.display()))?
    };
    Ok(raw)
}

fn json_report(outcome: &Result<PublishInfo, ValidationError>) -> serde_json::Value {
    match outcome {
        Ok(info) => serde_json::json!({
            "valid": true,
            "publish_info": info,
        }),
        Err(err) => {
            let errors: Vec<_> = err
                .violations()
                .iter()
                .map(|v| {
                    serde_json::json!({
                        "field": v.field,
                        "message": v.violation.to_string(),
                    })
                })
                .collect();
            serde_json::json!({
                "valid": false,
                "errors": errors,
            })
        }
    }
}

fn print_text_report(
    outcome: &Result<PublishInfo, ValidationError>,
    config_path: Option<&Path>,
    verbose: bool,
) {
    println!("{}", output::header("Validation Results"));
    println!();

    if let Some(path) = config_path {
        println!("Config: {}", output::path_style().apply_to(path.display()));
        println!();
    }

    match outcome {
        Ok(info) => {
            if verbose {
                println!("{}", output::key_value("type", &info.publish_type().to_string()));
                if info.publish_type().has_package() {
                    println!("{}", output::key_value("module_name", info.module_name()));
                    println!("{}", output::key_value("project_link", info.project_link()));
                }
                println!("{}", output::key_value("name", info.name()));
                println!("{}", output::key_value("author", info.author()));
                println!("{}", output::key_value("homepage", info.homepage()));
                let tags: Vec<&str> = info.tags().iter().map(|t| t.label.as_str()).collect();
                println!("{}", output::key_value("tags", &tags.join(", ")));
                println!();
            }
            output::success(&format!("{} passed all checks", info.name()));
        }
        Err(err) => {
            println!("{}", style("Errors:").red().bold());
            for violation in err.violations() {
                output::error_item(&violation.to_string());
            }
            println!();
            println!(
                "{} with {} error(s)",
                style("✗ Validation failed").red().bold(),
                err.len()
            );
        }
    }
}
