//! Risk scoring engine

use crate::{RiskFactors, RiskInput};
use serde::{Deserialize, Serialize};

/// Amount at which the amount factor saturates
const AMOUNT_SATURATION: f64 = 50_000.0;

/// Payment delay (days) at which the delay factor saturates
const DELAY_SATURATION_DAYS: f64 = 60.0;

const AMOUNT_CAP: f64 = 25.0;
const SECTOR_CAP: f64 = 20.0;
const DELAY_CAP: f64 = 25.0;

/// Maximum contribution of each factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorCaps {
    /// Amount cap
    pub amount: f64,
    /// Sector cap
    pub sector: f64,
    /// Payment delay cap
    pub delay: f64,
    /// Customer behavior cap
    pub behavior: f64,
    /// Exposure cap
    pub exposure: f64,
}

impl FactorCaps {
    /// Highest total score reachable with these caps
    pub fn max_total(&self) -> f64 {
        self.amount + self.sector + self.delay + self.behavior + self.exposure
    }
}

/// Weight profile. Both profiles top out at exactly 100 and differ only in
/// how the behavior and exposure caps are split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeightProfile {
    /// Profile A: behavior 20, exposure 10
    #[serde(rename = "a", alias = "behavior_led")]
    BehaviorLed,
    /// Profile B: behavior 15, exposure 15
    #[default]
    #[serde(rename = "b", alias = "balanced")]
    Balanced,
}

impl WeightProfile {
    /// Factor caps for this profile
    pub fn caps(&self) -> FactorCaps {
        let (behavior, exposure) = match self {
            WeightProfile::BehaviorLed => (20.0, 10.0),
            WeightProfile::Balanced => (15.0, 15.0),
        };

        FactorCaps {
            amount: AMOUNT_CAP,
            sector: SECTOR_CAP,
            delay: DELAY_CAP,
            behavior,
            exposure,
        }
    }
}

/// Compute the five sub-factors for a validated input
pub fn score(input: &RiskInput, profile: WeightProfile) -> RiskFactors {
    let caps = profile.caps();

    let amount_weight = ((input.amount / AMOUNT_SATURATION) * caps.amount).min(caps.amount);
    let sector_weight = (f64::from(input.sector_risk_level) / 5.0) * caps.sector;
    let delay_weight = ((f64::from(input.payment_delay_days) / DELAY_SATURATION_DAYS)
        * caps.delay)
        .min(caps.delay);
    let behavior_weight = ((100.0 - f64::from(input.customer_score)) / 100.0) * caps.behavior;
    let exposure_weight = input.exposure_ratio * caps.exposure;

    RiskFactors {
        amount_weight,
        sector_weight,
        delay_weight,
        behavior_weight,
        exposure_weight,
    }
}

/// Round to 2 decimal places. Only for presentation, never mid-computation.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Risk scorer bound to a weight profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RiskScorer {
    profile: WeightProfile,
}

impl RiskScorer {
    /// Create new risk scorer
    pub fn new(profile: WeightProfile) -> Self {
        Self { profile }
    }

    /// Active weight profile
    pub fn profile(&self) -> WeightProfile {
        self.profile
    }

    /// Score a validated input
    pub fn score(&self, input: &RiskInput) -> RiskFactors {
        score(input, self.profile)
    }
}
