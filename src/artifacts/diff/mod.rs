//! Comparison reports and line diffing
//!
//! - `diff_algorithm`: Myers' diff for line-by-line comparison
//! - `listing`: renders a tagged comparator listing from two record sets
//! - `report`: tag recognition, the content window and the line classifier
//!
//! The classifier only relies on the tag convention of a listing, so it
//! works the same on reports produced by any comparator.

pub mod diff_algorithm;
pub mod listing;
pub mod report;
