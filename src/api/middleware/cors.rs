//! CORS middleware configuration.

use tower_http::cors::{Any, CorsLayer};

/// Allows cross-origin requests from any origin, with any method and header.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([axum::http::header::LOCATION])
}
