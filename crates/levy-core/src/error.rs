//! Error types for the presentation edge of the fee schedule.
//!
//! The fee calculation itself is total over finite input and never fails.
//! These errors only arise while turning raw user input and configuration
//! strings into values the calculator accepts.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("{field} is not a number: {value:?}")] NotANumber { field: &'static str, value: String },
    #[error("{field} is not finite: {value:?}")] NotFinite { field: &'static str, value: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown output format: {0}")] UnknownOutputFormat(String),
    #[error("unknown log format: {0}")] UnknownLogFormat(String),
}
