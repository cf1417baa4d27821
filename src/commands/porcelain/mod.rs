//! Porcelain commands (user-facing operations)
//!
//! - `concat`: diff two datasets and append the differences, printing a
//!   JSON result record
//! - `diff`: list the records found only on one side
//! - `print`: print the full content of a dataset

pub mod concat;
pub mod diff;
pub mod print;
