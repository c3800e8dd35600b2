//! HTTP reachability checks.
//!
//! Validators never talk to the network directly; they ask an [`UrlChecker`]
//! for the status code of a GET request. [`ReqwestChecker`] is the production
//! implementation, tests supply their own.

use std::time::Duration;

use noneflow_core::config::HttpConfig;
use tracing::{debug, warn};

use crate::Result;

/// Issues HTTP GET requests on behalf of the validators.
pub trait UrlChecker {
    /// Returns the response status, or `None` when no response was received.
    fn get(&self, url: &str) -> Option<u16>;
}

/// Whether a reachability outcome counts as reachable (any 2xx status).
pub fn is_success(status: Option<u16>) -> bool {
    matches!(status, Some(200..=299))
}

/// Blocking checker backed by `reqwest`.
pub struct ReqwestChecker {
    client: reqwest::blocking::Client,
}

impl ReqwestChecker {
    /// Builds a checker honoring the configured timeout and user agent.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }
}

impl UrlChecker for ReqwestChecker {
    fn get(&self, url: &str) -> Option<u16> {
        match self.client.get(url).send() {
            Ok(response) => {
                let status = response.status().as_u16();
                debug!(url, status, "reachability response");
                Some(status)
            }
            Err(e) => {
                warn!(url, error = %e, "reachability request failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success() {
        assert!(is_success(Some(200)));
        assert!(is_success(Some(204)));
        assert!(!is_success(Some(301)));
        assert!(!is_success(Some(404)));
        assert!(!is_success(Some(500)));
        assert!(!is_success(None));
    }

    #[test]
    fn test_reqwest_checker_builds_from_default_config() {
        assert!(ReqwestChecker::new(&HttpConfig::default()).is_ok());
    }
}
