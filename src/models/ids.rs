//! Strongly-typed ID wrappers
//!
//! Expense ids are opaque strings. New ids are UUID v4 in simple form, but any
//! string read back from storage is accepted, including timestamp-style ids.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Prefix used when rendering short ids
const DISPLAY_PREFIX: &str = "exp-";

/// Number of id characters shown in short form
const SHORT_LEN: usize = 8;

/// Unique identifier of an expense record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Get the full underlying id
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form used in listings (`exp-` + first 8 characters)
    pub fn short(&self) -> String {
        let head: String = self.0.chars().take(SHORT_LEN).collect();
        format!("{}{}", DISPLAY_PREFIX, head)
    }

    /// Check whether a user-typed reference (full id, short form or bare
    /// prefix) points at this id
    pub fn matches(&self, reference: &str) -> bool {
        let reference = reference.trim();
        let reference = reference.strip_prefix(DISPLAY_PREFIX).unwrap_or(reference);
        !reference.is_empty() && self.0.starts_with(reference)
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short())
    }
}

impl From<&str> for ExpenseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl FromStr for ExpenseId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(Self(s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s).to_string()))
    }
}
