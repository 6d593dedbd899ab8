use actix_web::web;

use crate::web::handlers;

// Each resource routes unmatched methods through the shared fallback so
// CORS preflight works on known paths too.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(handlers::index))
            .default_service(web::route().to(handlers::fallback)),
    )
    .service(
        web::resource("/health")
            .route(web::get().to(handlers::health_check))
            .default_service(web::route().to(handlers::fallback)),
    )
    .service(
        web::resource("/v1/models")
            .route(web::get().to(handlers::list_models))
            .default_service(web::route().to(handlers::fallback)),
    )
    .service(
        web::resource("/v1/chat/completions")
            .route(web::post().to(handlers::chat_completions))
            .default_service(web::route().to(handlers::fallback)),
    );
}
