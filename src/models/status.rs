use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline stage of a job application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Applied,
    Interviewing,
    Offer,
    Rejected,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Applied,
        Status::Interviewing,
        Status::Offer,
        Status::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Applied => "Applied",
            Status::Interviewing => "Interviewing",
            Status::Offer => "Offer",
            Status::Rejected => "Rejected",
        }
    }

    /// Exact match against the stored / exported spelling.
    pub fn from_name(s: &str) -> Option<Self> {
        Status::ALL.into_iter().find(|st| st.as_str() == s)
    }

    /// Helper: convert input from CLI (any case)
    pub fn from_input(s: &str) -> Option<Self> {
        let s = s.trim();
        Status::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_is_case_sensitive() {
        assert_eq!(Status::from_name("Offer"), Some(Status::Offer));
        assert_eq!(Status::from_name("offer"), None);
        assert_eq!(Status::from_name("Bogus"), None);
    }

    #[test]
    fn from_input_accepts_any_case() {
        assert_eq!(Status::from_input(" interviewing "), Some(Status::Interviewing));
        assert_eq!(Status::from_input("REJECTED"), Some(Status::Rejected));
    }

    #[test]
    fn serializes_as_variant_name() {
        let json = serde_json::to_string(&Status::Interviewing).unwrap();
        assert_eq!(json, "\"Interviewing\"");
    }
}
