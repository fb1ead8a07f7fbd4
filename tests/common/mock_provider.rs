//! Mock Wikipedia API
//!
//! Responses mimic the MediaWiki action API closely enough for the
//! handlers: `query.search` for searches, `parse` or `error` for pages.

use serde_json::{json, Value};
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Search response body for `term`
pub fn search_body(term: &str) -> Value {
    json!({
        "batchcomplete": "",
        "query": {
            "searchinfo": { "totalhits": 1 },
            "search": [{ "ns": 0, "title": term, "pageid": 42, "snippet": format!("About {term}") }]
        }
    })
}

/// Answer every search with `search_body(term)`
pub async fn mock_search(server: &MockServer) {
    Mock::given(method("GET"))
        .and(query_param("action", "query"))
        .and(query_param("list", "search"))
        .respond_with(|request: &wiremock::Request| {
            let term = request
                .url
                .query_pairs()
                .find(|(k, _)| k == "srsearch")
                .map(|(_, v)| v.into_owned())
                .unwrap_or_default();
            ResponseTemplate::new(200).set_body_json(search_body(&term))
        })
        .mount(server)
        .await;
}

pub async fn mock_page(server: &MockServer, slug: &str, title: &str, html: &str) {
    Mock::given(method("GET"))
        .and(query_param("action", "parse"))
        .and(query_param("page", slug))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "parse": { "title": title, "pageid": 7, "text": { "*": html } }
        })))
        .mount(server)
        .await;
}

pub async fn mock_missing_page(server: &MockServer, slug: &str) {
    Mock::given(method("GET"))
        .and(query_param("action", "parse"))
        .and(query_param("page", slug))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": { "code": "missingtitle", "info": "The page you specified doesn't exist." }
        })))
        .mount(server)
        .await;
}

/// Every request fails with `status`
pub async fn mock_failure(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
