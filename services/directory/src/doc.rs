//! OpenAPI documentation for the directory's REST surface.

use service_core::{ErrorEnvelope, User};
use utoipa::OpenApi;

/// OpenAPI document for the user directory API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User directory API",
        description = "Read-only lookup over the in-memory user seed set."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::list_users,
        service_core::health::ready,
        service_core::health::live,
    ),
    components(schemas(User, ErrorEnvelope)),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_registers_user_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/users/{id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/users"));
        assert!(paths.iter().any(|p| p.as_str() == "/health/ready"));
    }
}
