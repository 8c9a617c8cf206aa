//! Report and terminal-summary formatting.

pub mod format;

pub use format::*;
