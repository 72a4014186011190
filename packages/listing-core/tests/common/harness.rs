//! Local stand-in for the listing generation API.
//!
//! Spins up an axum server on an ephemeral port that records every request
//! and answers with whatever the test configured.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use test_context::AsyncTestContext;
use tokio::task::JoinHandle;

/// One request as the mock API saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

struct MockState {
    status: StatusCode,
    response: Value,
    requests: Vec<RecordedRequest>,
}

type SharedState = Arc<Mutex<MockState>>;

pub struct MockListingApi {
    addr: SocketAddr,
    state: SharedState,
    server: JoinHandle<()>,
}

impl AsyncTestContext for MockListingApi {
    async fn setup() -> Self {
        Self::start().await.expect("Failed to start mock listing API")
    }

    async fn teardown(self) {
        self.server.abort();
    }
}

impl MockListingApi {
    pub async fn start() -> Result<Self> {
        // Uses try_init() to avoid panicking if already initialized.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let state: SharedState = Arc::new(Mutex::new(MockState {
            status: StatusCode::OK,
            response: json!([]),
            requests: Vec::new(),
        }));

        let app = Router::new()
            .route("/v1/generate-listing", post(generate_listing))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .context("Failed to bind mock API listener")?;
        let addr = listener.local_addr()?;

        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            state,
            server,
        })
    }

    /// Base URL to configure the generator with.
    pub fn endpoint(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    pub fn respond_with(&self, status: StatusCode, response: Value) {
        let mut state = self.state.lock().unwrap();
        state.status = status;
        state.response = response;
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }
}

async fn generate_listing(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let mut state = state.lock().unwrap();
    state.requests.push(RecordedRequest {
        authorization: header("authorization"),
        content_type: header("content-type"),
        body,
    });

    (state.status, Json(state.response.clone()))
}
