//! Merge policies and the diff-concatenation core
//!
//! - `merge_policy`: merge state, policy resolution and record selection
//! - `diff_concat`: compare, classify, append and read back
//! - `concat_record`: invocation arguments and the result record

pub mod concat_record;
pub mod diff_concat;
pub mod merge_policy;
