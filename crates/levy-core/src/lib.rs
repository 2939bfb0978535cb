//! # levy-core
//! Foundation types, constants and traits for the Levy fee schedule.

pub mod constants;
pub mod error;
pub mod input;
pub mod traits;
pub mod types;
