use crate::errors::AppError;
use crate::models::JobApplication;
use crate::utils::collate::locale_cmp;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

/// Display order of the derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Newest date first
    #[default]
    #[value(name = "date_desc")]
    DateDesc,
    /// Oldest date first
    #[value(name = "date_asc")]
    DateAsc,
    /// Company A–Z
    #[value(name = "company_asc")]
    CompanyAsc,
    /// Company Z–A
    #[value(name = "company_desc")]
    CompanyDesc,
    /// Status A–Z
    #[value(name = "status_asc")]
    StatusAsc,
    /// Status Z–A
    #[value(name = "status_desc")]
    StatusDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::DateDesc,
        SortKey::DateAsc,
        SortKey::CompanyAsc,
        SortKey::CompanyDesc,
        SortKey::StatusAsc,
        SortKey::StatusDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::DateDesc => "date_desc",
            SortKey::DateAsc => "date_asc",
            SortKey::CompanyAsc => "company_asc",
            SortKey::CompanyDesc => "company_desc",
            SortKey::StatusAsc => "status_asc",
            SortKey::StatusDesc => "status_desc",
        }
    }

    /// Stable in-place sort of `items` by this key.
    pub(crate) fn sort(self, items: &mut [JobApplication]) {
        match self {
            // Unparseable dates go last in either direction.
            SortKey::DateDesc => items.sort_by_cached_key(|a| {
                let key = parse_date_key(&a.date);
                (key.is_none(), key.map(Reverse))
            }),
            SortKey::DateAsc => items.sort_by_cached_key(|a| {
                let key = parse_date_key(&a.date);
                (key.is_none(), key)
            }),
            SortKey::CompanyAsc => items.sort_by(|a, b| locale_cmp(&a.company, &b.company)),
            SortKey::CompanyDesc => items.sort_by(|a, b| locale_cmp(&b.company, &a.company)),
            SortKey::StatusAsc => {
                items.sort_by(|a, b| locale_cmp(a.status.as_str(), b.status.as_str()))
            }
            SortKey::StatusDesc => {
                items.sort_by(|a, b| locale_cmp(b.status.as_str(), a.status.as_str()))
            }
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::InvalidSort(s.to_string()))
    }
}

/// Chronological key of a stored date string.
///
/// Accepts plain `YYYY-MM-DD` (midnight) and RFC 3339 timestamps (UTC).
pub(crate) fn parse_date_key(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").ok()
}
