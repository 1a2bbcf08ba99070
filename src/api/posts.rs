//! Post management API handlers
//!
//! Contains HTTP request handlers for post CRUD operations and search.

use crate::api::extract::{JsonBody, PostIdPath, QueryParams};
use crate::api::utils::validate_create_request;
use crate::error::AppError;
use crate::state::{Post, PostUpdate, SharedState, SortDirection, SortField};
use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Query parameters for listing posts
#[derive(Debug, Default, Deserialize)]
pub struct ListPostsParams {
    /// Field to sort by (`title` or `content`)
    pub sort: Option<String>,
    /// Sort direction (`asc` or `desc`), defaults to `asc`
    pub direction: Option<String>,
}

/// Query parameters for searching posts
#[derive(Debug, Default, Deserialize)]
pub struct SearchPostsParams {
    /// Text to look for in titles
    pub title: Option<String>,
    /// Text to look for in contents
    pub content: Option<String>,
}

/// Create post request
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    /// Title of the new post
    pub title: Option<String>,
    /// Content of the new post
    pub content: Option<String>,
}

/// Update post request
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePostRequest {
    /// New title for the post (optional)
    pub title: Option<String>,
    /// New content for the post (optional)
    pub content: Option<String>,
}

impl From<UpdatePostRequest> for PostUpdate {
    fn from(request: UpdatePostRequest) -> Self {
        Self {
            title: request.title,
            content: request.content,
        }
    }
}

/// Message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
}

/// GET /api/posts - List all posts, optionally sorted
pub async fn list_posts(
    State(state): State<SharedState>,
    QueryParams(params): QueryParams<ListPostsParams>,
) -> Result<Json<Vec<Post>>, AppError> {
    let ordering = match params.sort.as_deref().filter(|s| !s.is_empty()) {
        Some(sort) => {
            let field: SortField = sort.parse()?;
            let direction: SortDirection = params.direction.as_deref().unwrap_or("asc").parse()?;
            Some((field, direction))
        }
        None => None,
    };

    let state = state.read().await;
    let posts: Vec<Post> = match ordering {
        Some((field, direction)) => state
            .posts_sorted(field, direction)
            .into_iter()
            .cloned()
            .collect(),
        None => state.posts().to_vec(),
    };

    Ok(Json(posts))
}

/// POST /api/posts - Create a new post
pub async fn create_post(
    State(state): State<SharedState>,
    JsonBody(request): JsonBody<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), AppError> {
    let (title, content) = validate_create_request(request)?;

    let mut state = state.write().await;
    let post = state.create_post(title, content).clone();
    info!(post_id = post.id, "Post created");

    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /api/posts/:id - Update a post
pub async fn update_post(
    State(state): State<SharedState>,
    PostIdPath(id): PostIdPath,
    JsonBody(request): JsonBody<UpdatePostRequest>,
) -> Result<Json<Post>, AppError> {
    let mut state = state.write().await;
    let post = state
        .update_post(id, request.into())
        .cloned()
        .ok_or(AppError::PostNotFound(id))?;
    info!(post_id = id, "Post updated");

    Ok(Json(post))
}

/// DELETE /api/posts/:id - Delete a post
pub async fn delete_post(
    State(state): State<SharedState>,
    PostIdPath(id): PostIdPath,
) -> Result<Json<MessageResponse>, AppError> {
    let mut state = state.write().await;
    state.remove_post(id).ok_or(AppError::PostNotFound(id))?;
    info!(post_id = id, "Post deleted");

    Ok(Json(MessageResponse {
        message: format!("Post with id {} has been deleted successfully.", id),
    }))
}

/// GET /api/posts/search - Search posts by title or content
pub async fn search_posts(
    State(state): State<SharedState>,
    QueryParams(params): QueryParams<SearchPostsParams>,
) -> Json<Vec<Post>> {
    let state = state.read().await;
    let posts: Vec<Post> = state
        .search_posts(params.title.as_deref(), params.content.as_deref())
        .into_iter()
        .cloned()
        .collect();

    Json(posts)
}
