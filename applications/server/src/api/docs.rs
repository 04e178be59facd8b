/// OpenAPI description of the HTTP surface
use super::{health, usuario, usuario::CreateUserRequest};
use crate::error::ErrorResponse;
use usuario_core::UserRecord;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API de Usuários",
        version = "1.0.0",
        description = "API para gerenciar usuários"
    ),
    paths(usuario::create_user, usuario::get_user, health::health),
    components(schemas(
        CreateUserRequest,
        UserRecord,
        ErrorResponse,
        health::HealthResponse
    )),
    tags(
        (name = "Usuario", description = "User records keyed by national identifier"),
        (name = "Health", description = "Service status")
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI document advertising `server_url`
pub fn openapi(server_url: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![utoipa::openapi::Server::new(server_url)]);
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_both_usuario_routes() {
        let doc = openapi("http://localhost:3000");

        assert!(doc.paths.paths.contains_key("/usuario"));
        assert!(doc.paths.paths.contains_key("/usuario/{id}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }

    #[test]
    fn advertises_the_configured_server() {
        let doc = openapi("http://example.test:8080");
        let servers = doc.servers.unwrap();

        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].url, "http://example.test:8080");
    }

    #[test]
    fn declares_record_and_error_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.unwrap().schemas;

        assert!(schemas.contains_key("CreateUserRequest"));
        assert!(schemas.contains_key("UserRecord"));
        assert!(schemas.contains_key("ErrorResponse"));
    }

    #[test]
    fn create_route_lists_conflict_and_server_error() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let responses = &json["paths"]["/usuario"]["post"]["responses"];

        assert!(responses.get("201").is_some());
        assert!(responses.get("400").is_some());
        assert!(responses.get("500").is_some());
    }
}
