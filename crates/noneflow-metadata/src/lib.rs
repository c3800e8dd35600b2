//! Publish submission metadata for noneflow.
//!
//! This crate provides the types describing an adapter, plugin or bot
//! submission and the validators that turn raw issue-form fields into a
//! checked [`PublishInfo`].

pub mod error;
pub mod reachability;
pub mod registry;
pub mod types;
pub mod validation;

pub use error::{MetadataError, ValidationError};
pub use reachability::{ReqwestChecker, UrlChecker};
pub use registry::{load_known_registry, KnownEntry};
pub use types::publish::{PublishInfo, PublishType, RawSubmission};
pub use types::tag::Tag;
pub use validation::{validate_tags, FieldViolation, ValidationContext, Violation};

/// Result type alias for metadata operations.
pub type Result<T> = std::result::Result<T, MetadataError>;
