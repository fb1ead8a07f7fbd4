//! Test application
//!
//! Builds the real router over an in-memory counter store and a wiremock
//! Wikipedia, and drives it with `tower::ServiceExt::oneshot`.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use wiremock::MockServer;

use wikilytics::backend::analytics::CounterStore;
use wikilytics::backend::middleware::AUTH_TOKEN_HEADER;
use wikilytics::backend::provider::WikipediaClient;
use wikilytics::backend::routes::create_router;
use wikilytics::backend::server::AppState;

use super::auth_helpers::{test_credentials, test_keys, ADMIN_PASSWORD, ADMIN_USERNAME};

pub struct TestApp {
    pub router: Router,
    pub store: CounterStore,
    pub provider: MockServer,
}

/// Decoded response
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    pub async fn new() -> Self {
        let provider = MockServer::start().await;
        let store = CounterStore::in_memory()
            .await
            .expect("Failed to open in-memory store");

        let state = AppState {
            store: store.clone(),
            provider: WikipediaClient::new(provider.uri()).expect("Failed to build client"),
            token_keys: test_keys(),
            admin_credentials: test_credentials(),
        };

        Self {
            router: create_router(state),
            store,
            provider,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn get_with_token(&self, uri: &str, token: &str) -> TestResponse {
        self.send(
            Request::builder()
                .uri(uri)
                .header(AUTH_TOKEN_HEADER, token)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> TestResponse {
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// POST without a body or content type
    pub async fn post_empty(&self, uri: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Log in with the test admin account and return the token
    pub async fn login(&self) -> String {
        let response = self
            .post_json(
                "/admin/login",
                serde_json::json!({ "username": ADMIN_USERNAME, "password": ADMIN_PASSWORD }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {}", response.body);
        response.body["token"]
            .as_str()
            .expect("token in login response")
            .to_string()
    }
}

/// (subject, count) pairs of a counter list response
pub fn subjects_and_counts(body: &Value) -> Vec<(String, i64)> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|r| {
            (
                r["subject"].as_str().unwrap_or_default().to_string(),
                r["count"].as_i64().unwrap_or_default(),
            )
        })
        .collect()
}
