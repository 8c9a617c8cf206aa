//! Input/output helpers.
//!
//! - session JSON read/write (`session`)
//! - plain-text report export (`export`)

pub mod export;
pub mod session;

pub use export::*;
pub use session::*;
