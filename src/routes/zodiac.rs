use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{classify, ZODIAC_SIGNS};
use crate::models::{ClassifyQuery, HealthResponse, SignId};
use crate::routes::{error_response, rule_error_response};

/// Configure health and sign reference routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/zodiac", web::get().to(list_signs))
        // Must precede the `{sign}` route
        .route("/zodiac/classify", web::get().to(classify_date))
        .route("/zodiac/{sign}", web::get().to(get_sign));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// GET /api/v1/zodiac
async fn list_signs() -> impl Responder {
    HttpResponse::Ok().json(&ZODIAC_SIGNS[..])
}

/// GET /api/v1/zodiac/{sign}
async fn get_sign(path: web::Path<String>) -> impl Responder {
    match path.parse::<SignId>() {
        Ok(id) => HttpResponse::Ok().json(id.sign()),
        Err(e) => error_response(StatusCode::NOT_FOUND, "Zodiac sign not found", e.to_string()),
    }
}

/// Classify a birth date
///
/// GET /api/v1/zodiac/classify?month=2&day=18
async fn classify_date(query: web::Query<ClassifyQuery>) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for classify request: {:?}", errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    match classify(query.month, query.day) {
        Ok(sign) => {
            tracing::debug!("Classified {}/{} as {}", query.month, query.day, sign.id);
            HttpResponse::Ok().json(sign)
        }
        Err(e) => rule_error_response(&e),
    }
}
