use axum::{response::Html, routing::get, Json, Router};
use serde_json::{json, Value};

pub fn docs_handler() -> Router {
    Router::new()
        .route("/openapi-doc", get(openapi_doc))
        .route("/docs", get(swagger_ui))
}

pub fn openapi_document() -> Value {
    let id_param = |name: &str| {
        json!({
            "name": name,
            "in": "path",
            "required": true,
            "schema": { "type": "integer" }
        })
    };

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "PropertyHub API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "API documentation for PropertyHub API"
        },
        "paths": {
            "/user": {
                "get": { "summary": "List users" },
                "post": { "summary": "Invite a user" }
            },
            "/user/{id}": {
                "parameters": [id_param("id")],
                "get": { "summary": "Fetch a user" },
                "put": { "summary": "Complete a user profile" },
                "delete": { "summary": "Deactivate a user" }
            },
            "/user/{id}/contract": {
                "parameters": [id_param("id")],
                "get": { "summary": "List contracts held by a user" }
            },
            "/property": {
                "get": { "summary": "List properties" },
                "post": { "summary": "Create a property" }
            },
            "/property/{propertyId}": {
                "parameters": [id_param("propertyId")],
                "get": { "summary": "Fetch a property" },
                "put": { "summary": "Update a property" },
                "delete": { "summary": "Delete a property" }
            },
            "/property/{propertyId}/feedback": {
                "parameters": [id_param("propertyId")],
                "get": { "summary": "List feedback for a property" },
                "post": { "summary": "Leave feedback (one per user per property)" },
                "put": { "summary": "Update existing feedback" }
            },
            "/property/{propertyId}/contract": {
                "parameters": [id_param("propertyId")],
                "get": { "summary": "List contracts for a property" },
                "post": {
                    "summary": "Create a contract with its lease document",
                    "requestBody": {
                        "content": {
                            "multipart/form-data": {
                                "schema": {
                                    "type": "object",
                                    "required": ["userId", "startDate", "endDate", "file"],
                                    "properties": {
                                        "userId": { "type": "integer" },
                                        "startDate": { "type": "string", "format": "date" },
                                        "endDate": { "type": "string", "format": "date" },
                                        "file": { "type": "string", "format": "binary" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}

async fn openapi_doc() -> Json<Value> {
    Json(openapi_document())
}

async fn swagger_ui() -> Html<&'static str> {
    Html(
        r##"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>PropertyHub API</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
  </head>
  <body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
      window.onload = () => {
        window.ui = SwaggerUIBundle({ url: "/openapi-doc", dom_id: "#swagger-ui" });
      };
    </script>
  </body>
</html>"##,
    )
}
