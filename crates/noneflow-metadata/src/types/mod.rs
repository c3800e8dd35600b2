//! Submission data types.

pub mod publish;
pub mod tag;
