//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
///
/// Extractor failures (bad JSON, bad path id, bad query string) are turned
/// into 400 problem responses here so they look like every other error.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/v1")
                    .route("/posts", web::post().to(posts::create_post))
                    .route("/posts", web::put().to(posts::update_post))
                    .route("/posts", web::get().to(posts::get_all_posts))
                    .route("/posts/{id}", web::get().to(posts::get_post))
                    .route("/posts/{id}", web::delete().to(posts::delete_post)),
            ),
    );
}
