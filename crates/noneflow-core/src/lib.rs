//! noneflow Core - Core library for publish validation
//!
//! This crate provides the shared error types and configuration handling
//! used by the metadata validators and the `noneflow` CLI.

pub mod config;
pub mod error;

pub use config::{Config, HttpConfig, PypiConfig, ValidationConfig};
pub use error::{ConfigError, NoneflowError, Result};
