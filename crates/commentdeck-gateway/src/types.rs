//! Request envelopes and the comment entity — field names match the wire
//! format exactly.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fixed sort order the comment API expects.
pub const ORDER_BY_NEWEST: &str = "CreatedDate DESC";

/// Body of a comment search call.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    #[serde(rename = "orderBy")]
    pub order_by: String,
    #[serde(rename = "pageNumber")]
    pub page_number: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    #[serde(rename = "relatedToId")]
    pub related_to_id: String,
}

impl SearchRequest {
    pub fn new(
        related_to_id: impl Into<String>,
        page_number: Option<u32>,
        page_size: Option<u32>,
    ) -> Self {
        Self {
            order_by: ORDER_BY_NEWEST.to_string(),
            page_number: page_number.unwrap_or(1),
            page_size: page_size.unwrap_or(20),
            related_to_id: related_to_id.into(),
        }
    }
}

/// The nested `comment` object of a create/reply call.
#[derive(Debug, Clone, Serialize)]
pub struct CommentBody {
    #[serde(rename = "relatedToId")]
    pub related_to_id: String,
    #[serde(skip_serializing_if = "Option::is_none", rename = "viewerProfileId")]
    pub viewer_profile_id: Option<String>,
    pub message: String,
}

/// Body of a create-comment or create-reply call. The API expects the nested
/// `comment` object AND the duplicated top-level fields; both are required.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCommentRequest {
    pub comment: CommentBody,
    pub message: String,
    #[serde(rename = "relatedToId")]
    pub related_to_id: String,
    #[serde(skip_serializing_if = "Option::is_none", rename = "viewerProfileId")]
    pub viewer_profile_id: Option<String>,
}

impl CreateCommentRequest {
    pub fn new(
        related_to_id: impl Into<String>,
        viewer_profile_id: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        let related_to_id = related_to_id.into();
        let message = message.into();
        Self {
            comment: CommentBody {
                related_to_id: related_to_id.clone(),
                viewer_profile_id: viewer_profile_id.clone(),
                message: message.clone(),
            },
            message,
            related_to_id,
            viewer_profile_id,
        }
    }
}

/// A comment as returned by the API. Replies nest recursively under
/// `comments`. Unknown fields are carried through `extra` so a filtered page
/// re-serializes without losing anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "userName")]
    pub user_name: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        rename = "userProfilePicture"
    )]
    pub user_profile_picture: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        rename = "viewerProfileId"
    )]
    pub viewer_profile_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "createdDate")]
    pub created_date: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        rename = "createdDateTimestamp"
    )]
    pub created_date_timestamp: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, rename = "isPending")]
    pub is_pending: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}
