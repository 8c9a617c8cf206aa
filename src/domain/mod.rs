//! Domain types used throughout the assessment pipeline.
//!
//! This module defines:
//!
//! - the clinical input record (`ClinicalInput`) and its categorical enums
//! - derived assessment outputs (`RiskAssessment`, `RiskTier`,
//!   `RecommendationEntry`)
//! - the session file schema (`SessionFile`)
//! - boundary validation (`validate`)

pub mod types;

pub use types::*;
