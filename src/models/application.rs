use super::status::Status;
use serde::{Deserialize, Serialize};

/// One tracked job application.
///
/// This is also the exact JSON shape written to the storage slot and to
/// export files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: String,
    pub company: String,
    pub title: String,
    pub status: Status,
    pub date: String, // ISO 8601 date, not validated on import
    #[serde(default)]
    pub notes: String,
}

/// A record that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApplicationDraft {
    pub company: String,
    pub title: String,
    pub status: Status,
    pub date: String,
    pub notes: String,
}

/// Partial update: `Some` fields overwrite, `None` fields are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApplicationPatch {
    pub company: Option<String>,
    pub title: Option<String>,
    pub status: Option<Status>,
    pub date: Option<String>,
    pub notes: Option<String>,
}

impl JobApplication {
    pub fn from_draft(id: String, draft: ApplicationDraft) -> Self {
        Self {
            id,
            company: draft.company,
            title: draft.title,
            status: draft.status,
            date: draft.date,
            notes: draft.notes,
        }
    }

    /// Shallow merge of `patch` over this record. The id never changes.
    pub fn apply_patch(&mut self, patch: ApplicationPatch) {
        if let Some(company) = patch.company {
            self.company = company;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }
}

impl ApplicationPatch {
    pub fn is_empty(&self) -> bool {
        self.company.is_none()
            && self.title.is_none()
            && self.status.is_none()
            && self.date.is_none()
            && self.notes.is_none()
    }
}
