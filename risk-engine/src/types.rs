//! Core types for risk engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Version tag of the scoring model reported alongside every result
pub const MODEL_VERSION: &str = "1.2";

/// Fixed confidence reported by the model
pub const MODEL_CONFIDENCE: f64 = 0.93;

/// Attributes as received from a caller, possibly outside their domains.
///
/// The integer-valued attributes are carried as `f64` so that fractional or
/// oversized JSON numbers reach the validator instead of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawRiskInput {
    /// Transaction amount
    pub amount: f64,

    /// Sector risk tier, nominally a whole number 1-5
    pub sector_risk_level: f64,

    /// Days the counterparty is late on payment, nominally a whole number
    pub payment_delay_days: f64,

    /// Counterparty trustworthiness, nominally a whole number 0-100 (higher is better)
    pub customer_score: f64,

    /// Share of exposure relative to baseline, nominally 0-1
    pub exposure_ratio: f64,
}

/// Validated scoring input. Every field lies inside its legal range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskInput {
    /// Transaction amount (>= 0)
    pub amount: f64,

    /// Sector risk tier (1-5)
    pub sector_risk_level: u8,

    /// Payment delay in days
    pub payment_delay_days: u32,

    /// Customer score (0-100)
    pub customer_score: u8,

    /// Exposure ratio (0-1)
    pub exposure_ratio: f64,
}

/// Per-factor contributions to the total score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskFactors {
    /// Amount contribution (0-25)
    pub amount_weight: f64,

    /// Sector contribution (0-20)
    pub sector_weight: f64,

    /// Payment delay contribution (0-25)
    pub delay_weight: f64,

    /// Customer behavior contribution (0 to profile cap)
    pub behavior_weight: f64,

    /// Exposure contribution (0 to profile cap)
    pub exposure_weight: f64,
}

impl RiskFactors {
    /// Unweighted sum of the five factors
    pub fn total(&self) -> f64 {
        self.amount_weight
            + self.sector_weight
            + self.delay_weight
            + self.behavior_weight
            + self.exposure_weight
    }

    /// Copy with every factor rounded to 2 decimals, for presentation
    pub fn rounded(&self) -> Self {
        use crate::scoring::round2;

        Self {
            amount_weight: round2(self.amount_weight),
            sector_weight: round2(self.sector_weight),
            delay_weight: round2(self.delay_weight),
            behavior_weight: round2(self.behavior_weight),
            exposure_weight: round2(self.exposure_weight),
        }
    }
}

/// Risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    /// Low risk (score < 30)
    Low,
    /// Medium risk (30 <= score < 60)
    Medium,
    /// High risk (score >= 60)
    High,
}

impl RiskTier {
    /// Label used on the wire and in metrics
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk assessment result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Sum of the factors (0-100), unrounded
    pub total_score: f64,

    /// Tier derived from `total_score`
    pub tier: RiskTier,

    /// Factor breakdown, unrounded
    pub factors: RiskFactors,

    /// Model confidence
    pub confidence: f64,
}
