//! Analytics Module
//!
//! Usage counters for search keywords and page reads.
//!
//! - **`db`** - `CounterStore`, the SQLite-backed counter table
//! - **`handlers`** - `/search`, `/read/{slug}`, `/most-searched/{order}`
//!
//! Keywords and pages are counted in separate namespaces of the same table.
//! Both use the same find-or-increment upsert.

/// Counter persistence
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use db::CounterStore;
pub use handlers::{most_searched, read_page, search, PageContent};
