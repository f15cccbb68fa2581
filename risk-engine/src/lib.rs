//! Risk Engine for RiskLens
//!
//! Deterministic creditworthiness scoring: validates a handful of financial
//! attributes, turns them into five weighted sub-factors and classifies the
//! total into a risk tier. Pure and side-effect free.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod classification;
pub mod engine;
pub mod error;
pub mod scoring;
pub mod types;
pub mod validation;

pub use classification::classify;
pub use engine::{EngineConfig, RiskEngine};
pub use error::{Error, Result};
pub use scoring::{round2, score, FactorCaps, RiskScorer, WeightProfile};
pub use types::*;
pub use validation::{ValidationLimits, ValidationMode, Validator};
