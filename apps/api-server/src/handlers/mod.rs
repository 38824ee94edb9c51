//! HTTP handlers and route configuration.

mod health;
mod posts;
mod themes;

use actix_web::web;

use crate::middleware::error::{json_error_handler, path_error_handler};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/postagens")
                .route("", web::get().to(posts::list_posts))
                .route("", web::post().to(posts::create_post))
                .route("", web::put().to(posts::update_post))
                .route("/titulo/{titulo}", web::get().to(posts::search_posts_by_title))
                .route("/{id}", web::get().to(posts::get_post))
                .route("/{id}", web::delete().to(posts::delete_post)),
        )
        .service(
            web::scope("/temas")
                .route("", web::get().to(themes::list_themes))
                .route("", web::post().to(themes::create_theme))
                .route("", web::put().to(themes::update_theme))
                .route(
                    "/descricao/{descricao}",
                    web::get().to(themes::search_themes_by_description),
                )
                .route("/{id}", web::get().to(themes::get_theme))
                .route("/{id}", web::delete().to(themes::delete_theme)),
        );
}
