//! HTTP handlers and route configuration.

mod auth;
mod health;
mod posts;


use actix_web::web;

use crate::middleware::error::validation_error;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(validation_error))
        .app_data(web::QueryConfig::default().error_handler(validation_error))
        .app_data(web::PathConfig::default().error_handler(validation_error))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/posts")
                .service(
                    web::resource(["", "/"])
                        .route(web::get().to(posts::list_posts))
                        .route(web::post().to(posts::create_post)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(posts::get_post))
                        .route(web::put().to(posts::update_post))
                        .route(web::delete().to(posts::delete_post)),
                ),
        )
        .service(
            web::scope("/auth")
                .route("/login", web::get().to(auth::login))
                .route("/callback", web::get().to(auth::callback)),
        );
}
