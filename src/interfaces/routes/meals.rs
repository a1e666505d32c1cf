use actix_web::web;

use crate::handlers::meals;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/meals")
            .service(
                web::resource("")
                    .route(web::get().to(meals::get_all_meals))
                    .route(web::post().to(meals::create_meal))
            )
            .service(
                web::resource("/{meal_slug}")
                    .route(web::get().to(meals::get_meal))
                    .route(web::delete().to(meals::delete_meal))
            )
    );
}
