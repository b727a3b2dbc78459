//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/users/*`                  - User resource (see [`crate::api::routes`])
//! - `GET /health`               - Health check
//! - `GET /api-docs/openapi.json` - OpenAPI document
//! - `GET /swagger-ui/`          - Interactive API documentation
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin allowed
//! - **Path normalization** - Trailing slash handling (API routes only; the
//!   Swagger UI serves its assets under a trailing slash)

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::api::openapi::ApiDoc;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(api::routes::user_routes())
        .route("/health", get(health_handler))
        .with_state(state);
    let api = NormalizePathLayer::trim_trailing_slash().layer(api);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(api)
        .layer(cors::layer())
        .layer(tracing::layer())
}
