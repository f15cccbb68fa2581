//! Scoring pipeline: validate, score, classify

use crate::{
    classify, RawRiskInput, Result, RiskInput, RiskResult, RiskScorer, ValidationLimits,
    ValidationMode, Validator, WeightProfile, MODEL_CONFIDENCE,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Validation strictness
    #[serde(default)]
    pub mode: ValidationMode,

    /// Weight profile
    #[serde(default)]
    pub profile: WeightProfile,

    /// Validator ceilings
    #[serde(default)]
    pub limits: ValidationLimits,
}

/// Risk engine. Holds only configuration, so it is cheap to copy and safe to
/// share between threads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RiskEngine {
    validator: Validator,
    scorer: RiskScorer,
}

impl RiskEngine {
    /// Create new risk engine
    pub fn new(config: EngineConfig) -> Self {
        Self {
            validator: Validator::new(config.mode, config.limits),
            scorer: RiskScorer::new(config.profile),
        }
    }

    /// Active weight profile
    pub fn profile(&self) -> WeightProfile {
        self.scorer.profile()
    }

    /// Active validation mode
    pub fn mode(&self) -> ValidationMode {
        self.validator.mode()
    }

    /// Validate and assess raw attributes
    pub fn evaluate(&self, raw: &RawRiskInput) -> Result<RiskResult> {
        let input = self.validator.validate(raw)?;
        Ok(self.assess(&input))
    }

    /// Assess an already validated input
    pub fn assess(&self, input: &RiskInput) -> RiskResult {
        let factors = self.scorer.score(input);
        let total_score = factors.total();
        let tier = classify(total_score);

        debug!(
            total_score,
            tier = tier.as_str(),
            profile = ?self.scorer.profile(),
            "Risk assessed"
        );

        RiskResult {
            total_score,
            tier,
            factors,
            confidence: MODEL_CONFIDENCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, RiskTier};

    fn raw(
        amount: f64,
        sector: f64,
        delay: f64,
        customer: f64,
        exposure: f64,
    ) -> RawRiskInput {
        RawRiskInput {
            amount,
            sector_risk_level: sector,
            payment_delay_days: delay,
            customer_score: customer,
            exposure_ratio: exposure,
        }
    }

    #[test]
    fn test_profile_a_ceiling_is_high() {
        let engine = RiskEngine::new(EngineConfig {
            profile: WeightProfile::BehaviorLed,
            ..EngineConfig::default()
        });

        let result = engine.evaluate(&raw(50_000.0, 5.0, 60.0, 0.0, 1.0)).unwrap();

        assert_eq!(result.total_score, 100.0);
        assert_eq!(result.tier, RiskTier::High);
        assert_eq!(result.confidence, MODEL_CONFIDENCE);
    }

    #[test]
    fn test_all_minimum_input_is_low_in_lenient_mode() {
        let engine = RiskEngine::new(EngineConfig {
            mode: ValidationMode::Lenient,
            limits: ValidationLimits::unbounded(),
            ..EngineConfig::default()
        });

        let result = engine.evaluate(&raw(0.0, 1.0, 0.0, 100.0, 0.0)).unwrap();

        assert_eq!(result.total_score, 4.0);
        assert_eq!(result.tier, RiskTier::Low);
    }

    #[test]
    fn test_strict_default_rejects_zero_amount() {
        let engine = RiskEngine::default();

        let err = engine.evaluate(&raw(0.0, 1.0, 0.0, 100.0, 0.0)).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "amount", .. }));
    }

    #[test]
    fn test_modes_disagree_on_out_of_domain_input() {
        let input = raw(10_000.0, 6.0, 5.0, 80.0, 1.5);

        let strict = RiskEngine::default();
        let lenient = RiskEngine::new(EngineConfig {
            mode: ValidationMode::Lenient,
            ..EngineConfig::default()
        });

        assert!(strict.evaluate(&input).is_err());

        let result = lenient.evaluate(&input).unwrap();
        assert_eq!(result.factors.sector_weight, 20.0);
        assert_eq!(result.factors.exposure_weight, 15.0);
    }

    #[test]
    fn test_evaluation_is_repeatable() {
        let engine = RiskEngine::default();
        let input = raw(12_345.67, 2.0, 17.0, 63.0, 0.37);

        let first = engine.evaluate(&input).unwrap();
        let second = engine.evaluate(&input).unwrap();

        assert_eq!(first.total_score.to_bits(), second.total_score.to_bits());
        assert_eq!(first, second);
    }

    #[test]
    fn test_accessors_reflect_config() {
        let engine = RiskEngine::new(EngineConfig {
            mode: ValidationMode::Lenient,
            profile: WeightProfile::BehaviorLed,
            ..EngineConfig::default()
        });
        assert_eq!(engine.mode(), ValidationMode::Lenient);
        assert_eq!(engine.profile(), WeightProfile::BehaviorLed);

        let engine = RiskEngine::default();
        assert_eq!(engine.mode(), ValidationMode::Strict);
        assert_eq!(engine.profile(), WeightProfile::Balanced);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"mode": "lenient", "profile": "a"}"#).unwrap();

        assert_eq!(config.mode, ValidationMode::Lenient);
        assert_eq!(config.profile, WeightProfile::BehaviorLed);
        assert_eq!(config.limits, ValidationLimits::strict_defaults());
    }
}
