//! OpenAPI document for the REST API.

use utoipa::OpenApi;

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::api::dto::user::{FeatureDto, NewsDto, UserDto};
use crate::error::{ErrorBody, ErrorInfo};

/// Generated API document, served at `/api-docs/openapi.json` and rendered
/// by the Swagger UI at `/swagger-ui/`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bank Users API",
        description = "RESTful API for managing bank customers with their features and news."
    ),
    servers((url = "/", description = "Default Server URL")),
    tags(
        (name = "Users", description = "RESTful API for managing users."),
        (name = "Health", description = "Service health checks")
    ),
    paths(
        crate::api::handlers::users::list_users_handler,
        crate::api::handlers::users::get_user_handler,
        crate::api::handlers::users::create_user_handler,
        crate::api::handlers::users::update_user_handler,
        crate::api::handlers::users::delete_user_handler,
        crate::api::handlers::health::health_handler
    ),
    components(schemas(
        UserDto,
        FeatureDto,
        NewsDto,
        ErrorBody,
        ErrorInfo,
        HealthResponse,
        HealthChecks,
        CheckStatus
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_user_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/users"));
        assert!(doc.paths.paths.contains_key("/users/{id}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }

    #[test]
    fn test_document_has_user_schema() {
        let doc = ApiDoc::openapi();

        let components = doc.components.expect("components");
        assert!(components.schemas.contains_key("UserDto"));
        assert!(components.schemas.contains_key("FeatureDto"));
    }
}
