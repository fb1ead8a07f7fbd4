//! Provider Module
//!
//! Client for the external encyclopedia API. The provider is read-only and
//! treated as opaque: search results are passed through untouched, and page
//! reads are reduced to a title and rendered HTML.
//!
//! - **`wikipedia`** - `WikipediaClient`, `PageLookup`, `ProviderError`

/// Wikipedia API client
pub mod wikipedia;

pub use wikipedia::{PageLookup, ProviderError, WikipediaClient, DEFAULT_WIKIPEDIA_API_URL};
