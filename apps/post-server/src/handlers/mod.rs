//! HTTP handlers and route configuration.

mod auth;
mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/post", web::get().to(posts::list_posts))
            .route("/post", web::post().to(posts::create_post))
            .service(web::scope("/auth").route("/login", web::post().to(auth::login))),
    );
}
