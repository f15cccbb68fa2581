//! Tier classification

use crate::RiskTier;

/// Lowest score classified as Medium
pub const MEDIUM_THRESHOLD: f64 = 30.0;

/// Lowest score classified as High
pub const HIGH_THRESHOLD: f64 = 60.0;

/// Map a total score to its tier.
///
/// Buckets are inclusive at the low end. Defined for every `f64`: anything
/// below 30 (negatives included) is Low, anything from 60 up is High, and NaN
/// lands in High.
pub fn classify(total_score: f64) -> RiskTier {
    match total_score {
        s if s < MEDIUM_THRESHOLD => RiskTier::Low,
        s if s < HIGH_THRESHOLD => RiskTier::Medium,
        _ => RiskTier::High,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(classify(29.99), RiskTier::Low);
        assert_eq!(classify(30.0), RiskTier::Medium);
        assert_eq!(classify(59.99), RiskTier::Medium);
        assert_eq!(classify(60.0), RiskTier::High);
    }

    #[test]
    fn test_out_of_range_scores_fall_to_nearest_bucket() {
        assert_eq!(classify(-10.0), RiskTier::Low);
        assert_eq!(classify(f64::NEG_INFINITY), RiskTier::Low);
        assert_eq!(classify(150.0), RiskTier::High);
        assert_eq!(classify(f64::NAN), RiskTier::High);
    }

    #[test]
    fn test_just_below_threshold_stays_low() {
        let below = f64::from_bits(MEDIUM_THRESHOLD.to_bits() - 1);
        assert_eq!(classify(below), RiskTier::Low);
    }
}
