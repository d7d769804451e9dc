use crate::handlers;
use actix_web::{web, Scope};

pub fn config() -> Scope {
    web::scope("/api")
        .route("/health", web::get().to(handlers::health_check))
        .route("/views", web::post().to(handlers::mount_view))
        .route("/views/{view_id}", web::get().to(handlers::get_view))
        .route("/views/{view_id}", web::delete().to(handlers::unmount_view))
        .route("/views/{view_id}/query", web::put().to(handlers::update_query))
        .route("/views/{view_id}/keys", web::post().to(handlers::key_down))
        .route("/views/{view_id}/search", web::post().to(handlers::submit_search))
        .route(
            "/views/{view_id}/shuffle",
            web::post().to(handlers::shuffle_discovery),
        )
        .route("/views/{view_id}/select", web::post().to(handlers::select_book))
}
