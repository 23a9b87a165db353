//! Test helpers: a throwaway upstream chat-completions server

use axum::{
    body::Bytes,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderMap, StatusCode, Uri,
    },
    Router,
};
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// What the fake upstream received
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub path: String,
    pub authorization: Option<String>,
    pub body: Value,
}

pub struct Upstream {
    pub base_url: String,
    seen: Arc<Mutex<Option<SeenRequest>>>,
}

impl Upstream {
    pub fn last_request(&self) -> Option<SeenRequest> {
        self.seen.lock().clone()
    }
}

/// Serve `body` with `status` for every request on a random local port
pub async fn spawn_upstream(status: StatusCode, body: String) -> Upstream {
    spawn_slow_upstream(status, body, Duration::ZERO).await
}

/// Like `spawn_upstream`, but each response is held back for `delay`
pub async fn spawn_slow_upstream(status: StatusCode, body: String, delay: Duration) -> Upstream {
    let seen = Arc::new(Mutex::new(None));
    let captured = Arc::clone(&seen);

    let app = Router::new().fallback(move |uri: Uri, headers: HeaderMap, raw: Bytes| {
        let captured = Arc::clone(&captured);
        let body = body.clone();
        async move {
            let authorization = headers
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            *captured.lock() = Some(SeenRequest {
                path: uri.path().to_string(),
                authorization,
                body: serde_json::from_slice(&raw).unwrap_or(Value::Null),
            });
            tokio::time::sleep(delay).await;
            (status, [(CONTENT_TYPE, "application/json")], body)
        }
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Upstream {
        base_url: format!("http://{}", addr),
        seen,
    }
}

/// A base URL nothing is listening on
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
