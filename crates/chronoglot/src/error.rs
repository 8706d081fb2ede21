//! Error types for moment construction and parsing.
//!
//! The humanization path itself never errors: missing phrase resources
//! degrade to an empty string and degenerate magnitudes collapse to the
//! "just now" bucket. Only building a [`Moment`](crate::Moment) from
//! untrusted input is fallible.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MomentError {
    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

pub type Result<T> = std::result::Result<T, MomentError>;
