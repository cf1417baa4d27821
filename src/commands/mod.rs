//! Command implementations
//!
//! Commands are methods on [`Session`](crate::areas::session::Session),
//! split the same way the tool is used:
//!
//! - `plumbing`: raw access to the comparator (`compare`)
//! - `porcelain`: user-facing operations (`concat`, `diff`, `print`)

pub mod plumbing;
pub mod porcelain;
