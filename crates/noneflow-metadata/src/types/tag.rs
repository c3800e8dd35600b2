//! Submission tags.

use serde::{Deserialize, Serialize};

/// Maximum number of tags on one submission.
pub const MAX_TAGS: usize = 3;

/// Maximum tag label length, in characters.
pub const MAX_LABEL_CHARS: usize = 10;

/// A labeled, colored marker used to categorize a submission.
///
/// Tags decoded from user input are only guaranteed to have the right shape;
/// run them through [`validate_tags`](crate::validation::validate_tags) to
/// enforce the label and color rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Display text, at most [`MAX_LABEL_CHARS`] characters.
    pub label: String,
    /// Color as `#RRGGBB`.
    pub color: String,
}

impl Tag {
    /// Creates a new tag.
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}
