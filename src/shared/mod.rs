//! Shared Module
//!
//! Types that describe the JSON surface of the service. They are plain
//! serde types so any client (the browser frontend, tests) can reuse them.

/// Counter record and ranking types
pub mod counter;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use counter::{CounterRecord, SortOrder, SubjectKind};
pub use error::SharedError;
