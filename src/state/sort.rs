//! Sort options for listing posts
//!
//! Parses the `sort` and `direction` query values accepted by `GET /api/posts`.

use super::app_state::Post;
use crate::error::AppError;
use std::str::FromStr;

/// Post field a listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Order by post title
    Title,
    /// Order by post content
    Content,
}

impl SortField {
    /// Get the text of this field on the given post
    pub fn value_of<'a>(&self, post: &'a Post) -> &'a str {
        match self {
            SortField::Title => &post.title,
            SortField::Content => &post.content,
        }
    }
}

impl FromStr for SortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SortField::Title),
            "content" => Ok(SortField::Content),
            _ => Err(AppError::InvalidSortField),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest key first
    #[default]
    Asc,
    /// Largest key first
    Desc,
}

impl FromStr for SortDirection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(AppError::InvalidDirection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_field_parse() {
        assert_eq!("title".parse::<SortField>().unwrap(), SortField::Title);
        assert_eq!("content".parse::<SortField>().unwrap(), SortField::Content);
        // Field names are matched exactly
        assert!(matches!(
            "Title".parse::<SortField>(),
            Err(AppError::InvalidSortField)
        ));
        assert!(matches!(
            "id".parse::<SortField>(),
            Err(AppError::InvalidSortField)
        ));
    }

    #[test]
    fn test_sort_direction_parse() {
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert_eq!(
            "desc".parse::<SortDirection>().unwrap(),
            SortDirection::Desc
        );
        assert!(matches!(
            "".parse::<SortDirection>(),
            Err(AppError::InvalidDirection)
        ));
        assert!(matches!(
            "up".parse::<SortDirection>(),
            Err(AppError::InvalidDirection)
        ));
        assert_eq!(SortDirection::default(), SortDirection::Asc);
    }

    #[test]
    fn test_sort_field_value_of() {
        let post = Post {
            id: 1,
            title: "Title".to_string(),
            content: "Body".to_string(),
        };
        assert_eq!(SortField::Title.value_of(&post), "Title");
        assert_eq!(SortField::Content.value_of(&post), "Body");
    }
}
