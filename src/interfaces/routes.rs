use actix_web::web;

use crate::handlers::{home::home, system::health_check};

mod meals;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.service(
        web::scope("/api/v1")
            .configure(meals::config_routes)
    );
}
