use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;

use crate::routes::{reading_error_response, tarot_error_response, AppState};

/// Configure tarot reading routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/readings", web::post().to(start_reading))
        .route("/readings/{id}", web::get().to(get_reading))
        .route("/readings/{id}", web::delete().to(reset_reading))
        .route("/readings/{id}/reveal/{index}", web::post().to(reveal_card))
        .route("/readings/{id}/redraw", web::post().to(redraw_reading));
}

/// Draw three cards and open a new reading
///
/// POST /api/v1/readings
async fn start_reading(state: web::Data<AppState>) -> impl Responder {
    let reading = match state.tarot.draw_reading().await {
        Ok(reading) => reading,
        Err(e) => {
            tracing::error!("Failed to draw tarot reading: {}", e);
            return tarot_error_response(&e);
        }
    };

    match state.readings.start(reading).await {
        Ok(response) => {
            tracing::info!("Opened reading {}", response.reading_id);
            HttpResponse::Created().json(response)
        }
        Err(e) => reading_error_response(&e),
    }
}

/// GET /api/v1/readings/{id}
async fn get_reading(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match state.readings.snapshot(path.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => reading_error_response(&e),
    }
}

/// Reveal one card
///
/// POST /api/v1/readings/{id}/reveal/{index}
async fn reveal_card(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, usize)>,
) -> impl Responder {
    let (id, index) = path.into_inner();

    match state.readings.reveal(id, index).await {
        Ok(response) => {
            if response.synthesis_ready {
                tracing::info!("Reading {} complete", id);
            }
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            tracing::debug!("Reveal {} on reading {} rejected: {}", index, id, e);
            reading_error_response(&e)
        }
    }
}

/// Replace the cards of an existing reading with a fresh draw
///
/// POST /api/v1/readings/{id}/redraw
async fn redraw_reading(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();

    let reading = match state.tarot.draw_reading().await {
        Ok(reading) => reading,
        Err(e) => {
            tracing::error!("Failed to redraw reading {}: {}", id, e);
            return tarot_error_response(&e);
        }
    };

    match state.readings.redraw(id, reading).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => reading_error_response(&e),
    }
}

/// DELETE /api/v1/readings/{id}
async fn reset_reading(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();

    if state.readings.reset(id).await {
        HttpResponse::NoContent().finish()
    } else {
        reading_error_response(&crate::services::ReadingError::NotFound(id))
    }
}
