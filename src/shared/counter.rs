/**
 * Counter Records
 *
 * A counter record tracks how many times a subject (a search keyword or a
 * page slug) has been observed, and when it was last observed.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::shared::error::SharedError;

/// Namespace of a counted subject
///
/// Keywords come from `/search`, pages from `/read/{slug}`. The same string
/// can appear once per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum SubjectKind {
    /// Free-text search term
    Keyword,
    /// Page slug
    Page,
}

/// Persistent (subject, count, timestamp) tuple
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CounterRecord {
    /// Row ID
    pub id: i64,
    /// Keyword or page
    pub kind: SubjectKind,
    /// The search term or page slug
    pub subject: String,
    /// Number of observations, starts at 1
    pub count: i64,
    /// Time of the last observation
    pub observed_at: DateTime<Utc>,
}

/// Direction for ranking counter records by count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// SQL keyword for an `ORDER BY` clause
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = SharedError;

    /// Parse `asc` or `desc`, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(SharedError::validation(
                "order",
                "Invalid order parameter. Use \"asc\" or \"desc\".",
            )),
        }
    }
}
