use lazy_static::lazy_static;
use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry, TextEncoder,
};

lazy_static! {
    // Request outcomes on the scoring endpoint
    pub static ref RISK_REQUESTS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("risk_requests_total", "Scoring requests by outcome"),
        &["outcome"]
    ).expect("metric can be created");

    // Business metrics
    pub static ref RISK_ASSESSMENTS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("risk_assessments_total", "Completed assessments by risk level"),
        &["risk_level"]
    ).expect("metric can be created");

    pub static ref RISK_SCORE: Histogram = Histogram::with_opts(
        HistogramOpts::new("risk_score_distribution", "Distribution of total risk scores")
            .buckets(vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0])
    ).expect("metric can be created");

    pub static ref SCORING_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new("scoring_duration_seconds", "Time spent validating and scoring")
            .buckets(vec![0.00001, 0.00005, 0.0001, 0.0005, 0.001, 0.005])
    ).expect("metric can be created");

    // Rejections that never reach the scorer
    pub static ref AUTH_FAILURES: IntCounter = IntCounter::new(
        "auth_failures_total",
        "Requests rejected for a missing or unknown API key"
    ).expect("metric can be created");

    pub static ref VALIDATION_FAILURES: IntCounterVec = IntCounterVec::new(
        Opts::new("validation_failures_total", "Inputs rejected by strict validation"),
        &["field"]
    ).expect("metric can be created");

    pub static ref REGISTRY: Registry = {
        let registry = Registry::new();
        register_metrics(&registry).expect("metrics can be registered");
        registry
    };
}

/// Register all metrics with the given registry
pub fn register_metrics(registry: &Registry) -> Result<(), prometheus::Error> {
    registry.register(Box::new(RISK_REQUESTS_TOTAL.clone()))?;
    registry.register(Box::new(RISK_ASSESSMENTS_TOTAL.clone()))?;
    registry.register(Box::new(RISK_SCORE.clone()))?;
    registry.register(Box::new(SCORING_DURATION.clone()))?;
    registry.register(Box::new(AUTH_FAILURES.clone()))?;
    registry.register(Box::new(VALIDATION_FAILURES.clone()))?;

    Ok(())
}

/// Generate metrics output in Prometheus text format
pub fn metrics_handler() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = vec![];
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}
