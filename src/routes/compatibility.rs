use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{CompatibilityRequest, CompatibilityResponse};
use crate::routes::{error_response, rule_error_response, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/compatibility", web::post().to(score_pair));
}

/// Score two signs
///
/// POST /api/v1/compatibility
///
/// Request body:
/// ```json
/// {
///   "sign1": "aries",
///   "sign2": "leo"
/// }
/// ```
async fn score_pair(
    state: web::Data<AppState>,
    req: web::Json<CompatibilityRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for compatibility request: field_errors={:?}", errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    match state.engine.score(&req.sign1, &req.sign2) {
        Ok(result) => {
            tracing::info!(
                "Scored {} + {}: {} ({:?})",
                result.sign_a,
                result.sign_b,
                result.score,
                result.verdict
            );
            HttpResponse::Ok().json(CompatibilityResponse::from(result))
        }
        Err(e) => rule_error_response(&e),
    }
}
