//! Comment routes — the popup's fetch/post/reply actions.
//!
//! Request field names match the popup's original message payloads. Every
//! handler answers the uniform `{success, data}` / `{success: false, error}`
//! envelope; failures stay scoped to the single invocation.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use commentdeck_core::Result;
use commentdeck_gateway::{Comment, CommentFilter};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/comments/search", post(search_comments))
        .route("/comments", post(post_comment))
        .route("/comments/reply", post(send_reply))
}

#[derive(Debug, Deserialize)]
struct SearchBody {
    #[serde(rename = "relatedToId")]
    related_to_id: String,
    #[serde(rename = "pageNumber")]
    page_number: Option<u32>,
    #[serde(rename = "pageSize")]
    page_size: Option<u32>,
    #[serde(default)]
    filter: Option<CommentFilter>,
}

#[derive(Debug, Deserialize)]
struct PostCommentBody {
    #[serde(rename = "relatedToId")]
    related_to_id: String,
    #[serde(rename = "commentMessage")]
    comment_message: String,
}

#[derive(Debug, Deserialize)]
struct SendReplyBody {
    #[serde(rename = "commentId")]
    comment_id: String,
    #[serde(rename = "replyMessage")]
    reply_message: String,
}

async fn search_comments(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SearchBody>,
) -> Json<Value> {
    let result = state
        .gateway
        .search(&body.related_to_id, body.page_number, body.page_size)
        .await
        .map(|data| match &body.filter {
            Some(filter) if !filter.is_empty() => apply_filter(data, filter),
            _ => data,
        });
    outcome(result)
}

async fn post_comment(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PostCommentBody>,
) -> Json<Value> {
    let result = state
        .gateway
        .create_comment(&body.related_to_id, &body.comment_message)
        .await;
    outcome(result)
}

async fn send_reply(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SendReplyBody>,
) -> Json<Value> {
    let result = state
        .gateway
        .create_reply(&body.comment_id, &body.reply_message)
        .await;
    outcome(result)
}

fn outcome(result: Result<Value>) -> Json<Value> {
    match result {
        Ok(data) => Json(json!({ "success": true, "data": data })),
        Err(e) => {
            warn!("Comment operation failed: {}", e);
            Json(json!({ "success": false, "error": e.to_string() }))
        }
    }
}

/// Replace `data.comments` with the filtered list; every other field of the
/// response stays untouched. Unexpected shapes pass through unfiltered.
fn apply_filter(mut data: Value, filter: &CommentFilter) -> Value {
    let Some(comments) = data.get("comments").cloned() else {
        return data;
    };
    let Ok(comments) = serde_json::from_value::<Vec<Comment>>(comments) else {
        return data;
    };
    match serde_json::to_value(filter.apply(comments)) {
        Ok(filtered) => {
            data["comments"] = filtered;
            data
        }
        Err(_) => data,
    }
}
