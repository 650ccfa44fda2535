use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::bookkeeping::{store_feedback, subscribe_email};
use crate::error::TimetableError;
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct RatingRequest {
    pub rating: i64,
}

#[derive(Debug, Deserialize)]
pub struct EmailRequest {
    pub email: String,
}

/// POST /submit-rating {"rating": 1..5}
pub async fn submit_rating_handler(
    state: web::Data<AppState>,
    body: web::Json<RatingRequest>,
) -> Result<HttpResponse, TimetableError> {
    let rating = body.rating;
    state.ratings.submit(rating)?;
    Ok(HttpResponse::Ok().json(json!({"message": "Rating submitted successfully.", "rating": rating})))
}

/// GET /current-rating
pub async fn current_rating_handler(state: web::Data<AppState>) -> HttpResponse {
    let tally = state.ratings.current();
    HttpResponse::Ok().json(json!({"rating": tally.average, "total votes": tally.total_ratings}))
}

/// POST /subscribe-email {"email": "..."}
pub async fn subscribe_email_handler(
    state: web::Data<AppState>,
    body: web::Json<EmailRequest>,
) -> Result<HttpResponse, TimetableError> {
    subscribe_email(&state.config.data_dir, &body.email)?;
    Ok(HttpResponse::Ok().json(json!({"success": "email subscribed successfully"})))
}

/// POST /post-feedback {...}
/// Se guarda el objeto tal cual llega.
pub async fn post_feedback_handler(
    state: web::Data<AppState>,
    body: web::Json<serde_json::Value>,
) -> Result<HttpResponse, TimetableError> {
    let count = store_feedback(&state.config.data_dir, body.into_inner())?;
    Ok(HttpResponse::Ok().json(json!({"message": "Feedback submitted successfully", "count": count})))
}
