//! Service discovery handlers
//!
//! Health check and the OpenAPI document describing the post API.

use axum::response::Json;
use serde::Serialize;
use serde_json::{json, Value};

/// Path the OpenAPI document is served from
pub const OPENAPI_PATH: &str = "/static/masterblog.json";

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `healthy` while the process is serving
    pub status: String,
    /// Crate version
    pub version: String,
}

/// GET /api/health - Health check
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /static/masterblog.json - OpenAPI document
pub async fn openapi_spec() -> Json<Value> {
    Json(openapi_document())
}

/// Build the OpenAPI 3 document for the post routes
pub fn openapi_document() -> Value {
    let post_schema = json!({ "$ref": "#/components/schemas/Post" });
    let error_schema = json!({ "$ref": "#/components/schemas/Error" });
    let id_param = json!({
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "integer", "minimum": 0 }
    });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Masterblog API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "tags": [{ "name": "Post", "description": "Blog post management" }],
        "paths": {
            "/api/posts": {
                "get": {
                    "tags": ["Post"],
                    "summary": "List all posts, optionally sorted",
                    "parameters": [
                        {
                            "name": "sort",
                            "in": "query",
                            "schema": { "type": "string", "enum": ["title", "content"] }
                        },
                        {
                            "name": "direction",
                            "in": "query",
                            "schema": { "type": "string", "enum": ["asc", "desc"], "default": "asc" }
                        }
                    ],
                    "responses": {
                        "200": json_response("List of posts", json!({ "type": "array", "items": post_schema })),
                        "400": json_response("Invalid sort field or direction", error_schema.clone())
                    }
                },
                "post": {
                    "tags": ["Post"],
                    "summary": "Create a post",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/NewPost" }
                            }
                        }
                    },
                    "responses": {
                        "201": json_response("Created post", post_schema.clone()),
                        "400": json_response("Missing field(s)", error_schema.clone())
                    }
                }
            },
            "/api/posts/{id}": {
                "put": {
                    "tags": ["Post"],
                    "summary": "Update a post",
                    "parameters": [id_param.clone()],
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/PostUpdate" }
                            }
                        }
                    },
                    "responses": {
                        "200": json_response("Updated post", post_schema.clone()),
                        "404": json_response("Post not found", error_schema.clone())
                    }
                },
                "delete": {
                    "tags": ["Post"],
                    "summary": "Delete a post",
                    "parameters": [id_param],
                    "responses": {
                        "200": json_response("Deletion confirmation", json!({
                            "type": "object",
                            "properties": { "message": { "type": "string" } }
                        })),
                        "404": json_response("Post not found", error_schema)
                    }
                }
            },
            "/api/posts/search": {
                "get": {
                    "tags": ["Post"],
                    "summary": "Search posts by title or content",
                    "parameters": [
                        { "name": "title", "in": "query", "schema": { "type": "string" } },
                        { "name": "content", "in": "query", "schema": { "type": "string" } }
                    ],
                    "responses": {
                        "200": json_response("Matching posts", json!({ "type": "array", "items": post_schema }))
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Post": {
                    "type": "object",
                    "required": ["id", "title", "content"],
                    "properties": {
                        "id": { "type": "integer" },
                        "title": { "type": "string" },
                        "content": { "type": "string" }
                    }
                },
                "NewPost": {
                    "type": "object",
                    "required": ["title", "content"],
                    "properties": {
                        "title": { "type": "string" },
                        "content": { "type": "string" }
                    }
                },
                "PostUpdate": {
                    "type": "object",
                    "properties": {
                        "title": { "type": "string" },
                        "content": { "type": "string" }
                    }
                },
                "Error": {
                    "type": "object",
                    "required": ["error"],
                    "properties": { "error": { "type": "string" } }
                }
            }
        }
    })
}

fn json_response(description: &str, schema: Value) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": schema } }
    })
}
