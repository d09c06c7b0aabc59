//! Utility modules.
//!
//! - [`exec`]: external command execution
//! - [`fs`]: path normalization and output file writing
//! - [`plural`]: count formatting for summaries

pub mod exec;
pub mod fs;
pub mod plural;
