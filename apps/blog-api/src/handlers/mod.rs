//! HTTP handlers and route configuration.

mod docs;
mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::FormConfig::default()
            .error_handler(|err, _req| AppError::InvalidForm(err.to_string()).into()),
    )
    .app_data(
        // A non-integer id never reaches the handler
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::NotFound(err.to_string()).into()),
    )
    .route("/posts", web::get().to(posts::list_posts))
    .service(
        web::scope("/blog")
            .route("/add", web::post().to(posts::add_post))
            .route("/{id}", web::get().to(posts::get_post)),
    )
    .route("/health", web::get().to(health::health_check))
    .service(docs::swagger_ui());
}
