//! OpenAPI document and browsable API reference
//!
//! The document is assembled from the `#[utoipa::path]` annotations on the
//! handlers, rendered once at startup, and served at `/docs/json`. The UI
//! at `/docs` embeds the same document.

use axum::body::Bytes;
use axum::http::header;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::error::ErrorBody;
use super::routes::health::{self, HealthResponse};
use super::routes::items::{self, CreateItemRequest, MessageBody, UpdateItemRequest};
use super::server::StartupError;
use crate::models::Item;

/// Path of the interactive UI
pub const DOCS_PATH: &str = "/docs";

/// Path of the raw OpenAPI JSON
pub const DOCS_JSON_PATH: &str = "/docs/json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Items API",
        description = "CRUD over the items table"
    ),
    paths(
        items::create_item,
        items::list_items,
        items::get_item,
        items::update_item,
        items::delete_item,
        health::health,
    ),
    components(schemas(
        Item,
        CreateItemRequest,
        UpdateItemRequest,
        MessageBody,
        ErrorBody,
        HealthResponse,
    )),
    tags(
        (name = "items", description = "Item resource"),
        (name = "system", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Serve the rendered document at `/docs/json`.
pub fn attach_document(
    router: Router,
    doc: &utoipa::openapi::OpenApi,
) -> Result<Router, StartupError> {
    let json = Bytes::from(doc.to_json().map_err(StartupError::Docs)?);
    tracing::debug!(bytes = json.len(), "OpenAPI document rendered");

    Ok(router.route(
        DOCS_JSON_PATH,
        get(move || {
            let json = json.clone();
            async move { ([(header::CONTENT_TYPE, "application/json")], json) }
        }),
    ))
}

/// Mount the interactive reference UI at `/docs`.
pub fn attach_ui(router: Router, doc: utoipa::openapi::OpenApi) -> Router {
    router.merge(Scalar::with_url(DOCS_PATH, doc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_item_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| *p == "/items"));
        assert!(paths.iter().any(|p| *p == "/items/{id}"));
        assert!(paths.iter().any(|p| *p == "/health"));
    }

    #[test]
    fn document_renders_as_json() {
        let json = ApiDoc::openapi().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["info"]["title"], "Items API");
        assert!(value["components"]["schemas"]["Item"].is_object());
    }

    #[test]
    fn create_request_requires_name() {
        let json = ApiDoc::openapi().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let schema = &value["components"]["schemas"]["CreateItemRequest"];

        let required = schema["required"].as_array().unwrap();
        assert!(required.iter().any(|field| field == "name"));
        assert!(!required.iter().any(|field| field == "description"));
        assert_eq!(schema["properties"]["name"]["type"], "string");
    }
}
