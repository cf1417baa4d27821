//! Dataset difference data structures and algorithms
//!
//! - `core`: shared output utilities (pager wrapper)
//! - `dataset`: dataset name validation
//! - `diff`: Myers' diff, comparator listings and the line classifier
//! - `merge`: merge policies and the diff-concatenation core

pub mod core;
pub mod dataset;
pub mod diff;
pub mod merge;
