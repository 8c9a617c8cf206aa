//! `cardio-risk` library crate.
//!
//! The binary (`cardio`) is a thin wrapper around this library so that:
//!
//! - the scoring core is testable without spawning processes
//! - modules are reusable (e.g., future GUI, batch screening, notebooks)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod chart;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod plot;
pub mod report;
pub mod score;
pub mod tui;
