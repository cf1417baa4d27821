//! Dataset stores and the command session
//!
//! - `store`: the `DatasetStore` boundary (compare, append, read) and its configuration
//! - `file_store`: datasets kept as text files under a root directory
//! - `memory_store`: in-memory datasets with failure injection
//! - `session`: command context holding the store, content window and writer

pub mod file_store;
pub mod memory_store;
pub mod session;
pub mod store;
