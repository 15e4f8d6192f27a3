// API route configuration

use crate::error::Error;
use crate::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .route("/health", web::get().to(handlers::health_check))
        .service(
            web::scope("/api")
                // Player lookup
                .route("/fetch-player", web::post().to(handlers::fetch_player))
                .route("/get-user-info", web::get().to(handlers::get_user_info))
                // Favorites
                .route("/favorites", web::get().to(handlers::list_favorites))
                .route("/favorites", web::post().to(handlers::add_favorite))
                .route(
                    "/favorites/{puuid}",
                    web::delete().to(handlers::remove_favorite),
                ),
        );
}

/// Malformed bodies answer with the same JSON error shape as every other failure
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| {
            Error::Validation(format!("Invalid request body: {}", err)).into()
        })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        Error::Validation(format!("Invalid query string: {}", err)).into()
    })
}
