//! Dataset difference concatenation
//!
//! `dconcat` compares two sequential datasets and appends the records found
//! only on one side into a target dataset. The crate is split the same way
//! the commands are layered:
//!
//! - `areas`: dataset stores (file-backed and in-memory) and the command session
//! - `artifacts`: comparison reports, the line classifier, merge policies
//!   and the diff-concatenation core
//! - `commands`: user-facing operations implemented on the session
//! - `error`: the error kinds surfaced by the core

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod error;
