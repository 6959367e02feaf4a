use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which subset of tasks a read operation returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    All,
    Active,
    Done,
}

impl StatusFilter {
    pub const ALL: &[StatusFilter] = &[StatusFilter::All, StatusFilter::Active, StatusFilter::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Done => "done",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Done => "Done",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "all" => Some(StatusFilter::All),
            "active" => Some(StatusFilter::Active),
            "done" => Some(StatusFilter::Done),
            _ => None,
        }
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        StatusFilter::All
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A single to-do item.
///
/// `id` and `created_at` are assigned at insert time and never change;
/// `completed` is the only mutable field and only flips via toggle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creation timestamp as stored: ISO-8601 UTC, second precision, trailing `Z`.
    pub fn created_at_str(&self) -> String {
        self.created_at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}
