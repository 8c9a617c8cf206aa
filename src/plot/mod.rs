//! Terminal plotting.
//!
//! - deterministic ASCII comparison bars (`ascii`)

pub mod ascii;

pub use ascii::*;
