use crate::errors::{ApiError, ApiResult};
use crate::metrics;
use crate::middleware::{ApiKeyAuth, ApiKeys};
use crate::models::*;
use actix_web::{http::header, web, HttpRequest, HttpResponse};
use chrono::Utc;
use risk_engine::{RiskEngine, MODEL_VERSION};
use tracing::{info, warn};
use uuid::Uuid;

const SERVICE_NAME: &str = "risklens";
const LANDING_PAGE: &str = include_str!("../static/index.html");

// ===== Landing =====
pub async fn root(req: HttpRequest) -> HttpResponse {
    let wants_html = req
        .headers()
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"));

    if wants_html {
        return HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(LANDING_PAGE);
    }

    HttpResponse::Ok().json(RootResponse {
        status: "RiskLens API is live".to_string(),
        version: MODEL_VERSION.to_string(),
    })
}

// ===== Health Check =====
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
        version: MODEL_VERSION.to_string(),
        timestamp: Utc::now(),
    })
}

// ===== Calculate Risk =====
pub async fn calculate_risk(
    req: web::Json<RiskRequest>,
    engine: web::Data<RiskEngine>,
) -> ApiResult<HttpResponse> {
    let request = req.into_inner();

    let timer = metrics::SCORING_DURATION.start_timer();
    let evaluated = engine.evaluate(&request.attributes());
    timer.observe_duration();

    let result = evaluated.map_err(|e| {
        warn!(field = e.field(), sector = %request.sector, "Rejected risk request: {}", e);
        metrics::VALIDATION_FAILURES
            .with_label_values(&[e.field()])
            .inc();
        metrics::RISK_REQUESTS_TOTAL
            .with_label_values(&["invalid"])
            .inc();
        ApiError::from(e)
    })?;

    let response = RiskResponse::new(Uuid::new_v4(), Utc::now(), &result);

    info!(
        request_id = %response.request_id,
        sector = %request.sector,
        "Risk calculated: {} | Level: {}",
        response.risk_score,
        response.risk_level
    );

    metrics::RISK_REQUESTS_TOTAL
        .with_label_values(&["scored"])
        .inc();
    metrics::RISK_ASSESSMENTS_TOTAL
        .with_label_values(&[result.tier.as_str()])
        .inc();
    metrics::RISK_SCORE.observe(result.total_score);

    Ok(HttpResponse::Ok()
        .insert_header(("X-Request-Id", response.request_id.to_string()))
        .json(response))
}

// ===== Prometheus =====
pub async fn metrics_export() -> ApiResult<HttpResponse> {
    let body = metrics::metrics_handler().map_err(|e| ApiError::InternalError(e.to_string()))?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(body))
}

/// JSON extractor settings: body errors become `MALFORMED_PAYLOAD`
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(16 * 1024)
        // Partners posting raw JSON without a Content-Type still get scored
        .content_type_required(false)
        .error_handler(|err, _req| {
            metrics::RISK_REQUESTS_TOTAL
                .with_label_values(&["malformed"])
                .inc();
            ApiError::MalformedPayload(err.to_string()).into()
        })
}

// ===== Configure Routes =====
pub fn configure_routes(cfg: &mut web::ServiceConfig, api_keys: ApiKeys) {
    cfg.service(
        web::scope("/v1")
            .wrap(ApiKeyAuth::new(api_keys))
            .route("/risk", web::post().to(calculate_risk)),
    )
    .route("/", web::get().to(root))
    .route("/health", web::get().to(health_check))
    .route("/metrics", web::get().to(metrics_export));
}

/// Everything an `App` needs: shared engine, extractor config and routes.
pub fn configure_app(
    engine: RiskEngine,
    api_keys: ApiKeys,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(engine))
            .app_data(json_config());
        configure_routes(cfg, api_keys);
    }
}
