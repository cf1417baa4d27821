//! Plumbing commands (low-level operations)
//!
//! - `compare`: print the raw, tagged comparator listing of two datasets

pub mod compare;
