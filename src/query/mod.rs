//! View query engine: filter and sort the canonical collection for display.
//!
//! Everything here is a pure function of its inputs. The canonical slice is
//! never modified; each call returns a fresh `Vec`.

mod sort;

pub use sort::SortKey;

use crate::errors::AppError;
use crate::models::{JobApplication, Status};
use std::fmt;
use std::str::FromStr;

/// Status restriction of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn matches(&self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => *s == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        Status::from_input(s)
            .map(StatusFilter::Only)
            .ok_or_else(|| AppError::InvalidStatus(s.to_string()))
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("All"),
            StatusFilter::Only(s) => fmt::Display::fmt(s, f),
        }
    }
}

/// Ephemeral parameters of a derived view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewQuery {
    pub search: String,
    pub status: StatusFilter,
    pub sort: SortKey,
}

impl ViewQuery {
    pub fn new(search: impl Into<String>, status: StatusFilter, sort: SortKey) -> Self {
        Self {
            search: search.into(),
            status,
            sort,
        }
    }

    /// Filtered, sorted copy of `applications`.
    pub fn apply(&self, applications: &[JobApplication]) -> Vec<JobApplication> {
        let needle = self.search.trim().to_lowercase();

        let mut items: Vec<JobApplication> = applications
            .iter()
            .filter(|a| matches_search(a, &needle) && self.status.matches(a.status))
            .cloned()
            .collect();

        self.sort.sort(&mut items);
        items
    }
}

fn matches_search(app: &JobApplication, needle: &str) -> bool {
    needle.is_empty()
        || app.company.to_lowercase().contains(needle)
        || app.title.to_lowercase().contains(needle)
}
