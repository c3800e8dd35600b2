//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_http(config)?;
    validate_pypi(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_http(config: &Config) -> Result<()> {
    if config.http.timeout_secs == 0 {
        return Err(ConfigError::InvalidValue {
            field: "http.timeout_secs".to_string(),
            message: "timeout must be greater than zero".to_string(),
        }
        .into());
    }

    if config.http.user_agent.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "http.user_agent".to_string(),
            message: "user agent cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_pypi(config: &Config) -> Result<()> {
    let parsed = url::Url::parse(&config.pypi.index_url).map_err(|e| {
        ConfigError::InvalidValue {
            field: "pypi.index_url".to_string(),
            message: e.to_string(),
        }
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            field: "pypi.index_url".to_string(),
            message: "must be an http or https URL".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = Config::default();
        config.http.timeout_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_blank_user_agent() {
        let mut config = Config::default();
        config.http.user_agent = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_index_url() {
        let mut config = Config::default();
        config.pypi.index_url = "not a url".to_string();
        assert!(validate_config(&config).is_err());

        config.pypi.index_url = "ftp://pypi.org/pypi".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("pypi.index_url"));
    }
}
