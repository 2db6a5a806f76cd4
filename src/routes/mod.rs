// Route exports
pub mod compatibility;
pub mod readings;
pub mod zodiac;

use actix_web::{http::StatusCode, web, HttpResponse};
use std::sync::Arc;

use crate::core::{CompatibilityEngine, RuleError};
use crate::models::ErrorResponse;
use crate::services::{ReadingError, ReadingRegistry, TarotClient, TarotError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: CompatibilityEngine,
    pub tarot: Arc<TarotClient>,
    pub readings: ReadingRegistry,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(zodiac::configure)
            .configure(compatibility::configure)
            .configure(readings::configure),
    );
}

pub(crate) fn error_response(status: StatusCode, error: &str, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    })
}

pub(crate) fn rule_error_response(err: &RuleError) -> HttpResponse {
    if err.is_invalid_input() {
        error_response(StatusCode::BAD_REQUEST, "Invalid input", err.to_string())
    } else {
        error_response(StatusCode::CONFLICT, "Invalid state transition", err.to_string())
    }
}

pub(crate) fn reading_error_response(err: &ReadingError) -> HttpResponse {
    match err {
        ReadingError::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Reading not found", err.to_string()),
        ReadingError::Rule(rule) => rule_error_response(rule),
    }
}

pub(crate) fn tarot_error_response(err: &TarotError) -> HttpResponse {
    error_response(StatusCode::BAD_GATEWAY, "Failed to draw reading", err.to_string())
}
