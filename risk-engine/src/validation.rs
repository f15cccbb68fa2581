//! Input validation
//!
//! Turns a [`RawRiskInput`] into a [`RiskInput`]. In strict mode out-of-domain
//! fields are rejected; in lenient mode they are coerced into range.

use crate::{Error, RawRiskInput, Result, RiskInput};
use serde::{Deserialize, Serialize};

/// Highest amount accepted in strict mode by default
pub const DEFAULT_AMOUNT_CEILING: f64 = 10_000_000.0;

/// Longest payment delay accepted in strict mode by default
pub const DEFAULT_MAX_PAYMENT_DELAY_DAYS: u32 = 365;

const SECTOR_RISK_MIN: f64 = 1.0;
const SECTOR_RISK_MAX: f64 = 5.0;
const CUSTOMER_SCORE_MAX: f64 = 100.0;

/// How out-of-domain input is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Reject with [`Error::Validation`]
    #[default]
    Strict,
    /// Clamp into range, never fail
    Lenient,
}

/// Upper bounds applied by the validator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationLimits {
    /// Amount ceiling, `None` for uncapped
    pub amount_ceiling: Option<f64>,

    /// Payment delay ceiling in days, `None` for uncapped
    pub max_payment_delay_days: Option<u32>,
}

impl ValidationLimits {
    /// Bounds enforced by the public API: 10M amount, one year of delay
    pub fn strict_defaults() -> Self {
        Self {
            amount_ceiling: Some(DEFAULT_AMOUNT_CEILING),
            max_payment_delay_days: Some(DEFAULT_MAX_PAYMENT_DELAY_DAYS),
        }
    }

    /// No upper bounds at all
    pub fn unbounded() -> Self {
        Self {
            amount_ceiling: None,
            max_payment_delay_days: None,
        }
    }
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self::strict_defaults()
    }
}

/// Input validator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Validator {
    mode: ValidationMode,
    limits: ValidationLimits,
}

impl Validator {
    /// Create new validator
    pub fn new(mode: ValidationMode, limits: ValidationLimits) -> Self {
        Self { mode, limits }
    }

    /// Strict validator with the default limits
    pub fn strict() -> Self {
        Self::new(ValidationMode::Strict, ValidationLimits::strict_defaults())
    }

    /// Lenient validator without upper bounds
    pub fn lenient() -> Self {
        Self::new(ValidationMode::Lenient, ValidationLimits::unbounded())
    }

    /// Configured mode
    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Validate raw attributes according to the configured mode
    pub fn validate(&self, raw: &RawRiskInput) -> Result<RiskInput> {
        match self.mode {
            ValidationMode::Strict => self.check(raw),
            ValidationMode::Lenient => Ok(self.coerce(raw)),
        }
    }

    fn check(&self, raw: &RawRiskInput) -> Result<RiskInput> {
        let amount_ceiling = self.limits.amount_ceiling.unwrap_or(f64::MAX);
        if !raw.amount.is_finite() || raw.amount <= 0.0 || raw.amount > amount_ceiling {
            return Err(Error::validation("amount", raw.amount));
        }

        if !is_whole_within(raw.sector_risk_level, SECTOR_RISK_MIN, SECTOR_RISK_MAX) {
            return Err(Error::validation("sector_risk_level", raw.sector_risk_level));
        }

        if !is_whole_within(raw.payment_delay_days, 0.0, self.max_delay()) {
            return Err(Error::validation("payment_delay_days", raw.payment_delay_days));
        }

        if !is_whole_within(raw.customer_score, 0.0, CUSTOMER_SCORE_MAX) {
            return Err(Error::validation("customer_score", raw.customer_score));
        }

        if !raw.exposure_ratio.is_finite() || !(0.0..=1.0).contains(&raw.exposure_ratio) {
            return Err(Error::validation("exposure_ratio", raw.exposure_ratio));
        }

        // Whole numbers inside the target ranges, the casts are lossless.
        Ok(RiskInput {
            amount: raw.amount,
            sector_risk_level: raw.sector_risk_level as u8,
            payment_delay_days: raw.payment_delay_days as u32,
            customer_score: raw.customer_score as u8,
            exposure_ratio: raw.exposure_ratio,
        })
    }

    fn coerce(&self, raw: &RawRiskInput) -> RiskInput {
        let amount_ceiling = self.limits.amount_ceiling.unwrap_or(f64::MAX);
        let amount = if raw.amount.is_nan() {
            0.0
        } else {
            raw.amount.min(amount_ceiling).max(0.0)
        };

        let exposure_ratio = if raw.exposure_ratio.is_nan() {
            0.0
        } else {
            raw.exposure_ratio.clamp(0.0, 1.0)
        };

        RiskInput {
            amount,
            sector_risk_level: round_into(raw.sector_risk_level, SECTOR_RISK_MIN, SECTOR_RISK_MAX)
                as u8,
            payment_delay_days: round_into(raw.payment_delay_days, 0.0, self.max_delay()) as u32,
            customer_score: round_into(raw.customer_score, 0.0, CUSTOMER_SCORE_MAX) as u8,
            exposure_ratio,
        }
    }

    fn max_delay(&self) -> f64 {
        self.limits
            .max_payment_delay_days
            .map_or(f64::from(u32::MAX), f64::from)
    }
}

/// Whole number inside `[min, max]`. NaN and infinities never qualify.
fn is_whole_within(value: f64, min: f64, max: f64) -> bool {
    value.fract() == 0.0 && (min..=max).contains(&value)
}

/// Nearest whole number inside `[min, max]`, NaN maps to `min`
fn round_into(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.round().clamp(min, max)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::strict()
    }
}
