//! Offset/limit pagination rules for list endpoints.
//!
//! Callers may pass any signed value; these helpers pin them to the range
//! the storage layer is willing to serve.

use serde::{Deserialize, Deserializer};

/// Page size used when the caller does not supply `limit`.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Largest page a single list call returns.
pub const MAX_PAGE_SIZE: i64 = 100;

/// `?skip=&limit=` query parameters.
///
/// An empty value (`?skip=`) counts as absent.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct PageParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub skip: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<i64>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid integer `{value}`: {e}"))),
    }
}

/// A validated page window, ready to bind into `OFFSET` / `LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: i64,
    pub limit: i64,
}

impl PageParams {
    pub fn resolve(self) -> Page {
        Page {
            skip: clamp_skip(self.skip),
            limit: clamp_limit(self.limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE),
        }
    }
}

/// Clamp a user-provided limit into `0..=max`.
///
/// Zero is allowed and yields an empty page.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(0, max)
}

/// Clamp a user-provided skip to non-negative.
pub fn clamp_skip(skip: Option<i64>) -> i64 {
    skip.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
