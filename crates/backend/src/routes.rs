use axum::{routing::get, Router};

use crate::handlers;

/// All HTTP routes of the application.
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Platforms
        .route(
            "/api/platforms",
            get(handlers::platform::list_all).post(handlers::platform::create),
        )
        .route(
            "/api/platforms/:id",
            get(handlers::platform::get_by_id)
                .put(handlers::platform::update)
                .delete(handlers::platform::delete),
        )
        // Format mappings
        .route(
            "/api/format_mappings",
            get(handlers::format_mapping::list_all).post(handlers::format_mapping::create),
        )
        .route(
            "/api/format_mappings/:id",
            get(handlers::format_mapping::get_by_id)
                .put(handlers::format_mapping::update)
                .delete(handlers::format_mapping::delete),
        )
}
