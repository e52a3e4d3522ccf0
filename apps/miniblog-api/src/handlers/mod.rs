//! HTTP handlers and route configuration.

mod activity;
mod analytics;
mod auth;
mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .route("/analytics", web::get().to(analytics::post_analytics))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            )
            // Posts; "/mine" must precede "/{id}"
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list_posts))
                    .route("", web::post().to(posts::create_post))
                    .route("/mine", web::get().to(posts::my_posts))
                    .route("/{id}", web::get().to(posts::get_post))
                    .route("/{id}", web::put().to(posts::update_post))
                    .route("/{id}", web::delete().to(posts::delete_post))
                    .route("/{id}/likes", web::post().to(posts::like_post))
                    .route("/{id}/comments", web::post().to(posts::comment_post)),
            )
            .service(
                web::resource("/activity")
                    .route(web::get().to(activity::list_activity))
                    .route(web::delete().to(activity::clear_activity)),
            ),
    );
}
