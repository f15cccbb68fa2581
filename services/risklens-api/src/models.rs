use chrono::{DateTime, Utc};
use risk_engine::{round2, RawRiskInput, RiskFactors, RiskResult, RiskTier, MODEL_VERSION};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ===== Risk Request =====
#[derive(Debug, Deserialize, Clone)]
pub struct RiskRequest {
    pub amount: f64,
    /// Informational only, never weighted
    pub sector: String,
    // Whole numbers, checked by the validator so fractions get a 422
    pub sector_risk_level: f64,
    pub payment_delay_days: f64,
    pub customer_score: f64,
    pub exposure_ratio: f64,
}

impl RiskRequest {
    pub fn attributes(&self) -> RawRiskInput {
        RawRiskInput {
            amount: self.amount,
            sector_risk_level: self.sector_risk_level,
            payment_delay_days: self.payment_delay_days,
            customer_score: self.customer_score,
            exposure_ratio: self.exposure_ratio,
        }
    }
}

// ===== API Response =====
#[derive(Debug, Serialize, Deserialize)]
pub struct RiskResponse {
    pub request_id: Uuid,
    pub model_version: String,
    pub risk_score: f64,
    pub risk_level: RiskTier,
    pub risk_factors: RiskFactors,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
}

impl RiskResponse {
    /// Assemble the envelope; rounding happens here and nowhere earlier.
    pub fn new(request_id: Uuid, timestamp: DateTime<Utc>, result: &RiskResult) -> Self {
        RiskResponse {
            request_id,
            model_version: MODEL_VERSION.to_string(),
            risk_score: round2(result.total_score),
            risk_level: result.tier,
            risk_factors: result.factors.rounded(),
            confidence: result.confidence,
            timestamp,
        }
    }
}

// ===== Landing =====
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub status: String,
    pub version: String,
}

// ===== Health Check =====
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

// ===== Error Response =====
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use risk_engine::MODEL_CONFIDENCE;

    #[test]
    fn test_response_rounds_at_the_boundary() {
        let result = RiskResult {
            total_score: 36.666666666666664,
            tier: RiskTier::Medium,
            factors: RiskFactors {
                amount_weight: 10.0,
                sector_weight: 12.0,
                delay_weight: 4.166666666666667,
                behavior_weight: 4.5,
                exposure_weight: 6.0,
            },
            confidence: MODEL_CONFIDENCE,
        };

        let response = RiskResponse::new(Uuid::nil(), Utc::now(), &result);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["risk_score"], 36.67);
        assert_eq!(value["risk_level"], "Medium");
        assert_eq!(value["risk_factors"]["delay_weight"], 4.17);
        assert_eq!(value["model_version"], "1.2");
        assert_eq!(value["confidence"], 0.93);
    }
}
