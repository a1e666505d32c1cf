use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;

use crate::{constants::START_TIME, repositories::meal::MealRepository, AppState};

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now = Utc::now();
    let uptime = now.signed_duration_since(*START_TIME);

    let database = match state.meal_service.repo.check_connection().await {
        Ok(_) => "OK",
        Err(_) => "Unavailable",
    };

    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "uptime_seconds": uptime.num_seconds(),
        "timestamp": now.to_rfc3339(),
        "database": database,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
