//! Gateway tests against an in-process mock of the comment API.
//!
//! The mock binds a real listener on 127.0.0.1 and records every request's
//! path, headers, and body, so these tests can assert exact wire behavior
//! (including that no request is made at all when the token is missing).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::routing::post;
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};

use commentdeck_core::Error;
use commentdeck_gateway::CommentGateway;
use commentdeck_store::{CredentialSet, MemoryCredentialStore};

struct MockApi {
    status: StatusCode,
    reply: Value,
    hits: AtomicUsize,
    requests: Mutex<Vec<RecordedRequest>>,
}

struct RecordedRequest {
    path: String,
    headers: HeaderMap,
    body: Value,
}

impl MockApi {
    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    fn last(&self) -> (String, HeaderMap, Value) {
        let requests = self.requests.lock();
        let last = requests.last().expect("no request recorded");
        (last.path.clone(), last.headers.clone(), last.body.clone())
    }
}

async fn record(
    State(api): State<Arc<MockApi>>,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    api.hits.fetch_add(1, Ordering::SeqCst);
    api.requests.lock().push(RecordedRequest {
        path: uri.path().to_string(),
        headers,
        body,
    });
    (api.status, Json(api.reply.clone()))
}

async fn serve_mock(status: StatusCode, reply: Value) -> (String, Arc<MockApi>) {
    let api = Arc::new(MockApi {
        status,
        reply,
        hits: AtomicUsize::new(0),
        requests: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/comment/search", post(record))
        .route("/comment", post(record))
        .with_state(api.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock listener");
    let addr = listener.local_addr().expect("mock addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock");
    });

    (format!("http://{}", addr), api)
}

fn store_with(
    token: Option<&str>,
    viewer_id: Option<&str>,
    x_pin: Option<&str>,
) -> Arc<MemoryCredentialStore> {
    Arc::new(MemoryCredentialStore::with_set(CredentialSet {
        api_token: token.map(str::to_string),
        viewer_id: viewer_id.map(str::to_string),
        x_pin: x_pin.map(str::to_string),
    }))
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

#[tokio::test]
async fn test_missing_token_issues_no_network_calls() {
    let (base, api) = serve_mock(StatusCode::OK, json!({})).await;
    let gateway = CommentGateway::with_base_url(store_with(None, None, None), base);

    assert!(matches!(
        gateway.search("adv-1", None, None).await,
        Err(Error::MissingCredential)
    ));
    assert!(matches!(
        gateway.create_comment("adv-1", "hi").await,
        Err(Error::MissingCredential)
    ));
    assert!(matches!(
        gateway.create_reply("c-1", "hi").await,
        Err(Error::MissingCredential)
    ));

    assert_eq!(api.hits(), 0);
}

#[tokio::test]
async fn test_empty_token_counts_as_missing() {
    let (base, api) = serve_mock(StatusCode::OK, json!({})).await;
    let gateway = CommentGateway::with_base_url(store_with(Some(""), None, None), base);

    assert!(matches!(
        gateway.search("adv-1", None, None).await,
        Err(Error::MissingCredential)
    ));
    assert_eq!(api.hits(), 0);
}

#[tokio::test]
async fn test_search_sends_exact_body_and_headers() {
    let reply = json!({
        "comments": [{ "id": "c-1", "message": "hi", "userName": "Whit" }],
        "totalCount": 1,
    });
    let (base, api) = serve_mock(StatusCode::OK, reply.clone()).await;
    let gateway = CommentGateway::with_base_url(
        store_with(Some("Bearer tok"), Some("viewer-1"), Some("")),
        base,
    );

    let data = gateway.search("X", Some(2), Some(5)).await.unwrap();
    // Round-trip: the response body comes back verbatim.
    assert_eq!(data, reply);

    let (path, headers, body) = api.last();
    assert_eq!(path, "/comment/search");
    assert_eq!(
        body,
        json!({
            "orderBy": "CreatedDate DESC",
            "pageNumber": 2,
            "pageSize": 5,
            "relatedToId": "X",
        })
    );
    assert_eq!(header(&headers, "authorization"), Some("Bearer tok"));
    assert_eq!(header(&headers, "content-type"), Some("application/json"));
    assert_eq!(
        header(&headers, "x-experience-name"),
        Some("Adventures In Odyssey")
    );
    assert_eq!(header(&headers, "x-viewer-id"), Some("viewer-1"));
    // The pin was observed empty, so an empty pin header is still sent.
    assert_eq!(header(&headers, "x-pin"), Some(""));
}

#[tokio::test]
async fn test_search_defaults_and_optional_headers_omitted() {
    let (base, api) = serve_mock(StatusCode::OK, json!({ "comments": [] })).await;
    let gateway = CommentGateway::with_base_url(store_with(Some("tok"), None, None), base);

    gateway.search("adv-1", None, None).await.unwrap();

    let (_, headers, body) = api.last();
    assert_eq!(body["pageNumber"], json!(1));
    assert_eq!(body["pageSize"], json!(20));
    assert_eq!(header(&headers, "x-viewer-id"), None);
    assert_eq!(header(&headers, "x-pin"), None);
}

#[tokio::test]
async fn test_search_non_success_is_remote_error() {
    let (base, _api) = serve_mock(StatusCode::INTERNAL_SERVER_ERROR, json!({})).await;
    let gateway = CommentGateway::with_base_url(store_with(Some("tok"), None, None), base);

    let err = gateway.search("adv-1", None, None).await.unwrap_err();
    match err {
        Error::Remote(message) => {
            assert_eq!(message, "Error fetching comments: Internal Server Error");
        }
        other => panic!("expected Remote, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_sends_duplicated_payload_without_pin() {
    let (base, api) = serve_mock(StatusCode::CREATED, json!({ "id": "new" })).await;
    let gateway = CommentGateway::with_base_url(
        store_with(Some("tok"), Some("viewer-9"), Some("1234")),
        base,
    );

    let data = gateway.create_comment("adv-7", "hello").await.unwrap();
    assert_eq!(data, json!({ "id": "new" }));

    let (path, headers, body) = api.last();
    assert_eq!(path, "/comment");
    assert_eq!(
        body,
        json!({
            "comment": {
                "relatedToId": "adv-7",
                "viewerProfileId": "viewer-9",
                "message": "hello",
            },
            "message": "hello",
            "relatedToId": "adv-7",
            "viewerProfileId": "viewer-9",
        })
    );
    assert_eq!(header(&headers, "x-viewer-id"), Some("viewer-9"));
    // The stored pin is never forwarded on create.
    assert_eq!(header(&headers, "x-pin"), None);
}

#[tokio::test]
async fn test_create_accepts_plain_ok_as_success() {
    let (base, _api) = serve_mock(StatusCode::OK, json!({ "id": "new" })).await;
    let gateway = CommentGateway::with_base_url(store_with(Some("tok"), None, None), base);

    let data = gateway.create_comment("adv-7", "hello").await.unwrap();
    assert_eq!(data, json!({ "id": "new" }));
}

#[tokio::test]
async fn test_create_failure_preserves_status_text() {
    let (base, _api) = serve_mock(StatusCode::BAD_REQUEST, json!({})).await;
    let gateway = CommentGateway::with_base_url(store_with(Some("tok"), None, None), base);

    let err = gateway.create_comment("adv-7", "hello").await.unwrap_err();
    match err {
        Error::Remote(message) => assert_eq!(message, "Error posting comment: Bad Request"),
        other => panic!("expected Remote, got {:?}", other),
    }
}

#[tokio::test]
async fn test_reply_targets_parent_comment_id() {
    let (base, api) = serve_mock(StatusCode::CREATED, json!({ "id": "r-1" })).await;
    let gateway =
        CommentGateway::with_base_url(store_with(Some("tok"), Some("viewer-9"), None), base);

    gateway.create_reply("comment-123", "agreed").await.unwrap();

    let (path, _, body) = api.last();
    assert_eq!(path, "/comment");
    assert_eq!(body["relatedToId"], json!("comment-123"));
    assert_eq!(body["comment"]["relatedToId"], json!("comment-123"));
}

#[tokio::test]
async fn test_reply_failure_context() {
    let (base, _api) = serve_mock(StatusCode::FORBIDDEN, json!({})).await;
    let gateway = CommentGateway::with_base_url(store_with(Some("tok"), None, None), base);

    let err = gateway.create_reply("c-1", "hi").await.unwrap_err();
    match err {
        Error::Remote(message) => assert_eq!(message, "Error sending reply: Forbidden"),
        other => panic!("expected Remote, got {:?}", other),
    }
}

#[tokio::test]
async fn test_repeated_search_is_idempotent() {
    let reply = json!({ "comments": [{ "id": "c-1", "message": "hi" }] });
    let (base, api) = serve_mock(StatusCode::OK, reply.clone()).await;
    let gateway = CommentGateway::with_base_url(store_with(Some("tok"), None, None), base);

    let first = gateway.search("adv-1", Some(1), Some(20)).await.unwrap();
    let second = gateway.search("adv-1", Some(1), Some(20)).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(api.hits(), 2);
}

#[tokio::test]
async fn test_transport_error_when_api_unreachable() {
    // Nothing is listening on this port (bound then dropped).
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let gateway = CommentGateway::with_base_url(
        store_with(Some("tok"), None, None),
        format!("http://{}", addr),
    );

    let err = gateway.search("adv-1", None, None).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
