//! HTTP application wiring (axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: catalog source + event log wiring, catalog fetch path
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(services: AppServices, static_dir: Option<std::path::PathBuf>) -> Router {
    let mut app = Router::new()
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::Extension(Arc::new(services)))
                .layer(CorsLayer::permissive()),
        );

    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app
}
