//! Analytics handlers
//!
//! Public endpoints: search, page read and the ranking view. Search and read
//! record their observation before calling Wikipedia; the count is kept even
//! if the provider call fails afterwards.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::backend::analytics::db::CounterStore;
use crate::backend::error::BackendError;
use crate::backend::provider::{PageLookup, WikipediaClient};
use crate::shared::{CounterRecord, SharedError, SortOrder, SubjectKind};

/// Query string of `GET /search`
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub term: Option<String>,
}

/// Body of a successful `GET /read/{slug}`
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    pub title: String,
    pub html_content: String,
}

/// GET /search?term=<string>
///
/// Counts the term, then returns Wikipedia's search response verbatim.
pub async fn search(
    State(store): State<CounterStore>,
    State(provider): State<WikipediaClient>,
    Query(params): Query<SearchParams>,
) -> Result<Json<serde_json::Value>, BackendError> {
    let term = params
        .term
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| SharedError::validation("term", "Missing search term"))?;

    let record = store.record(SubjectKind::Keyword, &term).await?;
    tracing::info!("Searched keyword: {} (count {})", term, record.count);

    let results = provider.search(&term).await?;
    Ok(Json(results))
}

/// GET /read/{slug}
///
/// Counts the page read, then returns its title and rendered HTML.
/// 404 when Wikipedia has no such page.
pub async fn read_page(
    State(store): State<CounterStore>,
    State(provider): State<WikipediaClient>,
    Path(slug): Path<String>,
) -> Result<Json<PageContent>, BackendError> {
    let record = store.record(SubjectKind::Page, &slug).await?;
    tracing::info!("Page read: {} (count {})", slug, record.count);

    match provider.read_page(&slug).await? {
        PageLookup::Found {
            title,
            html_content,
        } => Ok(Json(PageContent {
            title,
            html_content,
        })),
        PageLookup::Missing => Err(BackendError::handler(StatusCode::NOT_FOUND, "Page not found")),
    }
}

/// GET /most-searched/{order}
///
/// Every counter record sorted by count. The order is validated before
/// the store is touched.
pub async fn most_searched(
    State(store): State<CounterStore>,
    Path(order): Path<String>,
) -> Result<Json<Vec<CounterRecord>>, BackendError> {
    let order: SortOrder = order.parse()?;
    tracing::info!("Ranking requested: {:?}", order);

    let records = store.ranked(order).await?;
    Ok(Json(records))
}
