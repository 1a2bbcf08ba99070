// Application state management
// Contains the post store and the id counter

use crate::state::sort::{SortDirection, SortField};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Unique identifier for a post
pub type PostId = u64;

/// Handle to the store shared by all request handlers
pub type SharedState = Arc<RwLock<AppState>>;

/// Blog post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    /// Unique identifier, never changes after creation
    pub id: PostId,
    /// Post title
    pub title: String,
    /// Post body text
    pub content: String,
}

/// Partial update of a post
/// Fields left as `None` keep their current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostUpdate {
    /// Replacement title
    pub title: Option<String>,
    /// Replacement content
    pub content: Option<String>,
}

/// Main application state
/// Holds the posts in insertion order and the next id to assign
#[derive(Debug, Clone)]
pub struct AppState {
    /// All posts, in insertion order
    posts: Vec<Post>,
    /// Id for the next created post; greater than every id assigned so far
    next_id: PostId,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create the store with the two seed posts
    pub fn new() -> Self {
        let mut state = Self::empty();
        state.create_post("First post".to_string(), "This is the first post.".to_string());
        state.create_post(
            "Second post".to_string(),
            "This is the second post.".to_string(),
        );
        state
    }

    /// Create a store with no posts
    pub fn empty() -> Self {
        Self {
            posts: Vec::new(),
            next_id: 1,
        }
    }

    /// Wrap this state in the shared handle used by the router
    pub fn into_shared(self) -> SharedState {
        Arc::new(RwLock::new(self))
    }

    /// Get all posts in insertion order
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Id the next created post will receive
    pub fn next_id(&self) -> PostId {
        self.next_id
    }

    /// Get a post by ID
    pub fn get_post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    /// Get all posts ordered by a field, compared case-insensitively
    ///
    /// The sort is stable in both directions: posts with equal keys keep
    /// their insertion order.
    pub fn posts_sorted(&self, field: SortField, direction: SortDirection) -> Vec<&Post> {
        let mut keyed: Vec<(String, &Post)> = self
            .posts
            .iter()
            .map(|post| (field.value_of(post).to_lowercase(), post))
            .collect();

        match direction {
            SortDirection::Asc => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
            SortDirection::Desc => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
        }

        keyed.into_iter().map(|(_, post)| post).collect()
    }

    /// Append a new post and assign it the next id
    /// Returns the created post
    pub fn create_post(&mut self, title: String, content: String) -> &Post {
        let post = Post {
            id: self.next_id,
            title,
            content,
        };
        self.next_id += 1;
        self.posts.push(post);
        &self.posts[self.posts.len() - 1]
    }

    /// Remove a post from the store
    /// Returns the removed post if it existed
    pub fn remove_post(&mut self, id: PostId) -> Option<Post> {
        let index = self.posts.iter().position(|post| post.id == id)?;
        Some(self.posts.remove(index))
    }

    /// Apply a partial update to a post in place
    /// Returns the updated post if it was found
    pub fn update_post(&mut self, id: PostId, update: PostUpdate) -> Option<&Post> {
        let post = self.posts.iter_mut().find(|post| post.id == id)?;

        if let Some(title) = update.title {
            post.title = title;
        }

        if let Some(content) = update.content {
            post.content = content;
        }

        Some(post)
    }

    /// Find posts whose title or content contains the given text, ignoring case
    ///
    /// An empty or absent query never matches, so searching with neither
    /// query returns nothing.
    pub fn search_posts(&self, title: Option<&str>, content: Option<&str>) -> Vec<&Post> {
        let title = title.filter(|q| !q.is_empty()).map(str::to_lowercase);
        let content = content.filter(|q| !q.is_empty()).map(str::to_lowercase);

        self.posts
            .iter()
            .filter(|post| {
                let matches_title = title
                    .as_deref()
                    .is_some_and(|q| post.title.to_lowercase().contains(q));
                let matches_content = content
                    .as_deref()
                    .is_some_and(|q| post.content.to_lowercase().contains(q));
                matches_title || matches_content
            })
            .collect()
    }

    /// Get the number of posts in the store
    pub fn post_count(&self) -> usize {
        self.posts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(posts: &[&Post]) -> Vec<PostId> {
        posts.iter().map(|post| post.id).collect()
    }

    fn state_with(posts: &[(&str, &str)]) -> AppState {
        let mut state = AppState::empty();
        for (title, content) in posts {
            state.create_post(title.to_string(), content.to_string());
        }
        state
    }

    #[test]
    fn test_app_state_seeded() {
        let state = AppState::new();
        assert_eq!(state.post_count(), 2);
        assert_eq!(state.next_id(), 3);
        assert_eq!(state.posts()[0].id, 1);
        assert_eq!(state.posts()[0].title, "First post");
        assert_eq!(state.posts()[0].content, "This is the first post.");
        assert_eq!(state.posts()[1].id, 2);
        assert_eq!(state.posts()[1].title, "Second post");
    }

    #[test]
    fn test_create_post_assigns_next_id() {
        let mut state = AppState::new();
        let post = state.create_post("A".to_string(), "B".to_string()).clone();
        assert_eq!(post.id, 3);
        assert_eq!(state.next_id(), 4);
        assert_eq!(state.posts().last(), Some(&post));

        let post = state.create_post("C".to_string(), "D".to_string());
        assert_eq!(post.id, 4);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut state = AppState::new();
        let id = state.create_post("A".to_string(), "B".to_string()).id;
        assert!(state.remove_post(id).is_some());
        assert_eq!(state.next_id(), id + 1);

        let post = state.create_post("C".to_string(), "D".to_string());
        assert_eq!(post.id, id + 1);
    }

    #[test]
    fn test_remove_post() {
        let mut state = AppState::new();
        let removed = state.remove_post(1);
        assert_eq!(removed.map(|post| post.id), Some(1));
        assert_eq!(state.post_count(), 1);
        assert!(state.get_post(1).is_none());
        // Remaining posts are not renumbered
        assert_eq!(state.posts()[0].id, 2);
    }

    #[test]
    fn test_remove_post_not_found() {
        let mut state = AppState::new();
        assert!(state.remove_post(99).is_none());
        assert_eq!(state.post_count(), 2);
        assert_eq!(state.next_id(), 3);
    }

    #[test]
    fn test_update_post_partial() {
        let mut state = AppState::new();
        let post = state
            .update_post(
                1,
                PostUpdate {
                    title: Some("Updated".to_string()),
                    content: None,
                },
            )
            .cloned();
        let post = post.unwrap();
        assert_eq!(post.id, 1);
        assert_eq!(post.title, "Updated");
        assert_eq!(post.content, "This is the first post.");
    }

    #[test]
    fn test_update_post_empty_is_noop() {
        let mut state = AppState::new();
        let before = state.get_post(2).cloned().unwrap();
        let after = state.update_post(2, PostUpdate::default()).cloned();
        assert_eq!(after, Some(before));
    }

    #[test]
    fn test_update_post_keeps_position() {
        let mut state = AppState::new();
        state.update_post(
            1,
            PostUpdate {
                title: Some("Z".to_string()),
                content: Some("z".to_string()),
            },
        );
        assert_eq!(state.posts()[0].id, 1);
        assert_eq!(state.posts()[0].content, "z");
    }

    #[test]
    fn test_update_post_not_found() {
        let mut state = AppState::new();
        assert!(state.update_post(42, PostUpdate::default()).is_none());
    }

    #[test]
    fn test_posts_sorted_title_desc() {
        let state = AppState::new();
        let sorted = state.posts_sorted(SortField::Title, SortDirection::Desc);
        assert_eq!(ids(&sorted), vec![2, 1]);
    }

    #[test]
    fn test_posts_sorted_case_insensitive() {
        let state = state_with(&[("banana", "x"), ("Apple", "y"), ("cherry", "z")]);
        let sorted = state.posts_sorted(SortField::Title, SortDirection::Asc);
        assert_eq!(ids(&sorted), vec![2, 1, 3]);

        let sorted = state.posts_sorted(SortField::Content, SortDirection::Desc);
        assert_eq!(ids(&sorted), vec![3, 2, 1]);
    }

    #[test]
    fn test_posts_sorted_stable_for_ties() {
        let state = state_with(&[("same", "1"), ("other", "2"), ("SAME", "3"), ("Same", "4")]);

        let asc = state.posts_sorted(SortField::Title, SortDirection::Asc);
        assert_eq!(ids(&asc), vec![2, 1, 3, 4]);

        let desc = state.posts_sorted(SortField::Title, SortDirection::Desc);
        assert_eq!(ids(&desc), vec![1, 3, 4, 2]);
    }

    #[test]
    fn test_posts_sorted_returns_every_post() {
        let state = state_with(&[("b", "c"), ("a", "a"), ("c", "b")]);
        for field in [SortField::Title, SortField::Content] {
            for direction in [SortDirection::Asc, SortDirection::Desc] {
                let mut sorted = ids(&state.posts_sorted(field, direction));
                sorted.sort_unstable();
                assert_eq!(sorted, vec![1, 2, 3]);
            }
        }
        // Sorting does not reorder the store itself
        assert_eq!(state.posts()[0].title, "b");
    }

    #[test]
    fn test_search_posts() {
        let state = AppState::new();
        assert_eq!(ids(&state.search_posts(Some("FIRST"), None)), vec![1]);
        assert_eq!(ids(&state.search_posts(None, Some("second post"))), vec![2]);
        assert_eq!(ids(&state.search_posts(Some("post"), None)), vec![1, 2]);
        assert!(state.search_posts(Some("missing"), None).is_empty());
    }

    #[test]
    fn test_search_posts_either_field_matches() {
        let state = state_with(&[("Rust", "systems"), ("Python", "scripting")]);
        let found = state.search_posts(Some("python"), Some("systems"));
        assert_eq!(ids(&found), vec![1, 2]);
    }

    #[test]
    fn test_search_posts_empty_queries_match_nothing() {
        let state = AppState::new();
        assert!(state.search_posts(None, None).is_empty());
        assert!(state.search_posts(Some(""), Some("")).is_empty());
        // An empty query does not disable the other one
        assert_eq!(ids(&state.search_posts(Some(""), Some("first"))), vec![1]);
    }
}
