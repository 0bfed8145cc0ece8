//! Client-side filters over a fetched page of comments.
//!
//! These reproduce the popup's filter controls: username and viewer-id
//! filters look at top-level comments only; the word filter keeps a comment
//! when the word appears in its message or anywhere in its reply tree.

use serde::Deserialize;

use crate::types::Comment;

/// Filters applied to a fetched page. Empty/missing fields are inactive.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentFilter {
    #[serde(default, rename = "userName")]
    pub user_name: Option<String>,
    #[serde(default, rename = "viewerProfileId")]
    pub viewer_profile_id: Option<String>,
    #[serde(default)]
    pub word: Option<String>,
}

impl CommentFilter {
    pub fn is_empty(&self) -> bool {
        fn unset(field: &Option<String>) -> bool {
            field.as_deref().map_or(true, |s| s.trim().is_empty())
        }
        unset(&self.user_name) && unset(&self.viewer_profile_id) && unset(&self.word)
    }

    /// Apply all active filters to a page of top-level comments.
    pub fn apply(&self, comments: Vec<Comment>) -> Vec<Comment> {
        let mut comments = comments;

        if let Some(name) = active(&self.user_name) {
            let name = name.to_lowercase();
            comments.retain(|c| c.user_name.to_lowercase().contains(&name));
        }

        if let Some(id) = active(&self.viewer_profile_id) {
            comments.retain(|c| c.viewer_profile_id.as_deref() == Some(id));
        }

        if let Some(word) = active(&self.word) {
            let word = word.to_lowercase();
            comments.retain(|c| contains_word(c, &word));
        }

        comments
    }
}

fn active(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// True if the comment or any nested reply contains the word.
/// `word` must already be lowercase.
pub fn contains_word(comment: &Comment, word: &str) -> bool {
    if comment.message.to_lowercase().contains(word) {
        return true;
    }
    comment.comments.iter().any(|reply| contains_word(reply, word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page() -> Vec<Comment> {
        serde_json::from_value(json!([
            {
                "id": "c-1",
                "message": "Loved this episode",
                "userName": "Connie",
                "viewerProfileId": "viewer-1",
                "comments": [
                    { "id": "c-2", "message": "Same here, the ENDING!", "userName": "Eugene" }
                ],
            },
            {
                "id": "c-3",
                "message": "First time listener",
                "userName": "Wooton",
                "viewerProfileId": "viewer-2",
            },
        ]))
        .unwrap()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = CommentFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(page()).len(), 2);
    }

    #[test]
    fn test_username_filter_is_substring_case_insensitive() {
        let filter = CommentFilter {
            user_name: Some("conn".into()),
            ..Default::default()
        };
        let kept = filter.apply(page());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].user_name, "Connie");
    }

    #[test]
    fn test_viewer_id_filter_is_exact() {
        let filter = CommentFilter {
            viewer_profile_id: Some("viewer-2".into()),
            ..Default::default()
        };
        let kept = filter.apply(page());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "c-3");
    }

    #[test]
    fn test_word_filter_searches_nested_replies() {
        // "ending" only appears in a reply; the parent comment is kept.
        let filter = CommentFilter {
            word: Some("ending".into()),
            ..Default::default()
        };
        let kept = filter.apply(page());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "c-1");
    }

    #[test]
    fn test_word_filter_drops_non_matching() {
        let filter = CommentFilter {
            word: Some("trombone".into()),
            ..Default::default()
        };
        assert!(filter.apply(page()).is_empty());
    }

    #[test]
    fn test_whitespace_only_fields_are_inactive() {
        let filter = CommentFilter {
            user_name: Some("   ".into()),
            ..Default::default()
        };
        assert!(filter.is_empty());
        assert_eq!(filter.apply(page()).len(), 2);
    }

    #[test]
    fn test_filters_combine() {
        let filter = CommentFilter {
            user_name: Some("o".into()), // matches Connie and Wooton
            word: Some("listener".into()),
            ..Default::default()
        };
        let kept = filter.apply(page());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "c-3");
    }
}
