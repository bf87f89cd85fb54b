//! Persistent store: the single owner of the canonical application list.
//!
//! Every mutation rewrites the whole collection into the storage slot.
//! Persistence is best effort: a failed write is logged and the in-memory
//! state stays authoritative for the rest of the session.

pub mod slot;

pub use slot::{MemorySlot, StorageSlot};

use crate::errors::AppResult;
use crate::models::{ApplicationDraft, ApplicationPatch, JobApplication};
use crate::transfer::{self, ImportOutcome};
use serde_json::Value;
use uuid::Uuid;

/// Fixed key of the durable slot holding the serialized collection.
pub const STORAGE_KEY: &str = "jobtracker:applications";

/// Fresh opaque record id (random 128-bit UUID).
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

pub struct Store<S: StorageSlot> {
    slot: S,
    applications: Vec<JobApplication>,
}

impl<S: StorageSlot> Store<S> {
    /// Hydrate from the slot. Missing or malformed data yields an empty store.
    pub fn open(slot: S) -> Self {
        let applications = load_from_slot(&slot);
        Self { slot, applications }
    }

    /// Canonical collection, newest addition first.
    pub fn applications(&self) -> &[JobApplication] {
        &self.applications
    }

    pub fn get(&self, id: &str) -> Option<&JobApplication> {
        self.applications.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.applications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }

    /// Insert a new record at the front and return its generated id.
    ///
    /// The draft is stored as given; trimming and required-field checks
    /// belong to the caller.
    pub fn add(&mut self, draft: ApplicationDraft) -> String {
        let id = generate_id();
        let app = JobApplication::from_draft(id.clone(), draft);
        self.applications.insert(0, app);
        self.persist();
        id
    }

    /// Merge `patch` over the record with `id`, keeping its position.
    ///
    /// Returns `false` (and changes nothing) when no record matches.
    pub fn update(&mut self, id: &str, patch: ApplicationPatch) -> bool {
        let Some(app) = self.applications.iter_mut().find(|a| a.id == id) else {
            return false;
        };
        app.apply_patch(patch);
        self.persist();
        true
    }

    /// Permanently delete the record with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.applications.len();
        self.applications.retain(|a| a.id != id);
        if self.applications.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Discard the canonical collection and substitute `applications` as is.
    pub fn replace_all(&mut self, applications: Vec<JobApplication>) {
        self.applications = applications;
        self.persist();
    }

    /// Parse an import payload and, if it is usable, replace the collection.
    pub fn import_json(&mut self, text: &str) -> ImportOutcome {
        match transfer::parse_import(text) {
            Some(batch) => {
                let outcome = ImportOutcome::Applied {
                    imported: batch.applications.len(),
                    dropped: batch.dropped,
                };
                self.replace_all(batch.applications);
                outcome
            }
            None => ImportOutcome::Rejected,
        }
    }

    /// Pretty-printed JSON array of the whole collection.
    pub fn export_json(&self) -> AppResult<String> {
        transfer::export_json(&self.applications)
    }

    pub fn into_slot(self) -> S {
        self.slot
    }

    fn persist(&mut self) {
        let encoded = match serde_json::to_string(&self.applications) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode applications; skipping persist");
                return;
            }
        };

        if let Err(e) = self.slot.write(STORAGE_KEY, &encoded) {
            tracing::warn!(
                key = STORAGE_KEY,
                error = %e,
                "failed to persist applications; keeping in-memory state"
            );
        }
    }
}

/// Read and decode the slot, degrading to an empty list on any problem.
fn load_from_slot<S: StorageSlot>(slot: &S) -> Vec<JobApplication> {
    let raw = match slot.read(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(key = STORAGE_KEY, error = %e, "storage slot unreadable; starting empty");
            return Vec::new();
        }
    };

    let items = match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            tracing::warn!(key = STORAGE_KEY, "stored value is not an array; starting empty");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(key = STORAGE_KEY, error = %e, "stored value is not valid JSON; starting empty");
            return Vec::new();
        }
    };

    let total = items.len();
    let applications: Vec<JobApplication> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();

    if applications.len() < total {
        tracing::warn!(
            skipped = total - applications.len(),
            "skipped stored records that could not be decoded; they will be dropped on the next write"
        );
    }

    applications
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::models::Status;

    fn draft(company: &str, title: &str, status: Status, date: &str) -> ApplicationDraft {
        ApplicationDraft {
            company: company.into(),
            title: title.into(),
            status,
            date: date.into(),
            notes: String::new(),
        }
    }

    /// Slot whose writes always fail, like a full or disabled storage.
    struct BrokenSlot;

    impl StorageSlot for BrokenSlot {
        fn read(&self, _key: &str) -> AppResult<Option<String>> {
            Err(AppError::Other("storage unavailable".into()))
        }

        fn write(&mut self, _key: &str, _value: &str) -> AppResult<()> {
            Err(AppError::Other("quota exceeded".into()))
        }
    }

    #[test]
    fn add_then_get_returns_draft_with_id() {
        let mut store = Store::open(MemorySlot::new());
        let d = draft("Acme", "Engineer", Status::Applied, "2024-01-05");

        let id = store.add(d.clone());
        let app = store.get(&id).expect("record exists");

        assert!(!app.id.is_empty());
        assert_eq!(app, &JobApplication::from_draft(id.clone(), d));
    }

    #[test]
    fn add_prepends_newest_first() {
        let mut store = Store::open(MemorySlot::new());
        let first = store.add(draft("A", "x", Status::Applied, "2024-03-01"));
        let second = store.add(draft("B", "y", Status::Applied, "2024-01-01"));

        let ids: Vec<&str> = store.applications().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec![second.as_str(), first.as_str()]);
    }

    #[test]
    fn generated_ids_are_unique() {
        let mut store = Store::open(MemorySlot::new());
        let a = store.add(draft("A", "x", Status::Applied, "2024-01-01"));
        let b = store.add(draft("A", "x", Status::Applied, "2024-01-01"));
        assert_ne!(a, b);
    }

    #[test]
    fn update_changes_only_patched_field() {
        let mut store = Store::open(MemorySlot::new());
        let other = store.add(draft("Beta", "PM", Status::Offer, "2024-02-01"));
        let id = store.add(draft("Acme", "Eng", Status::Applied, "2024-01-05"));
        let before = store.applications().to_vec();

        let matched = store.update(
            &id,
            ApplicationPatch {
                status: Some(Status::Interviewing),
                ..Default::default()
            },
        );

        assert!(matched);
        let after = store.applications();
        assert_eq!(after.len(), 2);
        assert_eq!(after[0].id, id);
        assert_eq!(after[0].status, Status::Interviewing);
        assert_eq!(after[0].company, before[0].company);
        assert_eq!(after[0].title, before[0].title);
        assert_eq!(after[0].date, before[0].date);
        assert_eq!(after[0].notes, before[0].notes);
        assert_eq!(store.get(&other), Some(&before[1]));
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let mut store = Store::open(MemorySlot::new());
        store.add(draft("Acme", "Eng", Status::Applied, "2024-01-05"));
        let before = store.applications().to_vec();

        let matched = store.update(
            "missing",
            ApplicationPatch {
                company: Some("Other".into()),
                ..Default::default()
            },
        );

        assert!(!matched);
        assert_eq!(store.applications(), before.as_slice());
    }

    #[test]
    fn remove_deletes_and_ignores_unknown() {
        let mut store = Store::open(MemorySlot::new());
        let keep = store.add(draft("Acme", "Eng", Status::Applied, "2024-01-05"));
        let gone = store.add(draft("Beta", "PM", Status::Offer, "2024-02-01"));

        assert!(store.remove(&gone));
        assert!(store.get(&gone).is_none());

        let before = store.applications().to_vec();
        assert!(!store.remove("missing"));
        assert_eq!(store.applications(), before.as_slice());
        assert!(store.get(&keep).is_some());
    }

    #[test]
    fn every_mutation_is_persisted() {
        let mut store = Store::open(MemorySlot::new());
        let id = store.add(draft("Acme", "Eng", Status::Applied, "2024-01-05"));
        store.update(
            &id,
            ApplicationPatch {
                notes: Some("called back".into()),
                ..Default::default()
            },
        );

        let slot = store.into_slot();
        let reopened = Store::open(slot);
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.applications()[0].notes, "called back");
    }

    #[test]
    fn remove_and_replace_all_are_persisted() {
        let mut store = Store::open(MemorySlot::new());
        let id = store.add(draft("Acme", "Eng", Status::Applied, "2024-01-05"));
        store.remove(&id);
        let store = Store::open(store.into_slot());
        assert!(store.is_empty());

        let mut store = store;
        store.replace_all(vec![JobApplication {
            id: "fixed".into(),
            company: "Gamma".into(),
            title: "QA".into(),
            status: Status::Rejected,
            date: "2023-12-01".into(),
            notes: String::new(),
        }]);
        let store = Store::open(store.into_slot());
        assert_eq!(store.get("fixed").map(|a| a.company.as_str()), Some("Gamma"));
    }

    #[test]
    fn malformed_slot_hydrates_empty() {
        for raw in ["not json", "{\"a\":1}", "42", "null"] {
            let store = Store::open(MemorySlot::with_value(STORAGE_KEY, raw));
            assert!(store.is_empty(), "expected empty store for {raw:?}");
        }
    }

    #[test]
    fn undecodable_records_are_skipped_on_hydrate() {
        let raw = r#"[
            {"id":"1","company":"Acme","title":"Eng","status":"Offer","date":"2024-01-05","notes":""},
            {"id":"2","company":"Beta"}
        ]"#;
        let store = Store::open(MemorySlot::with_value(STORAGE_KEY, raw));
        assert_eq!(store.len(), 1);
        assert_eq!(store.applications()[0].id, "1");
    }

    #[test]
    fn undecodable_records_are_gone_after_next_write() {
        let raw = r#"[
            {"id":"1","company":"Acme","title":"Eng","status":"Offer","date":"2024-01-05","notes":""},
            {"id":"2","company":"Beta"}
        ]"#;
        let mut store = Store::open(MemorySlot::with_value(STORAGE_KEY, raw));
        store.add(draft("Gamma", "PM", Status::Applied, "2024-02-01"));

        let slot = store.into_slot();
        let persisted: Vec<serde_json::Value> =
            serde_json::from_str(slot.get(STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(persisted.len(), 2);
        assert!(persisted.iter().all(|v| v["id"] != "2"));
    }

    #[test]
    fn failing_slot_keeps_memory_state() {
        let mut store = Store::open(BrokenSlot);
        assert!(store.is_empty());

        let id = store.add(draft("Acme", "Eng", Status::Applied, "2024-01-05"));
        assert!(store.get(&id).is_some());
        assert!(store.remove(&id));
        assert!(store.is_empty());
    }

    #[test]
    fn import_replaces_collection() {
        let mut store = Store::open(MemorySlot::new());
        store.add(draft("Old", "Role", Status::Applied, "2020-01-01"));

        let payload = r#"[
            {"company":"","title":"X","status":"Applied","date":"2024-01-01"},
            {"company":"Y","title":"Z","status":"Bogus","date":"2024-01-02"}
        ]"#;
        let outcome = store.import_json(payload);

        assert_eq!(
            outcome,
            ImportOutcome::Applied {
                imported: 1,
                dropped: 1
            }
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.applications()[0].company, "Y");
        assert_eq!(store.applications()[0].status, Status::Applied);
    }

    #[test]
    fn rejected_import_leaves_collection() {
        let mut store = Store::open(MemorySlot::new());
        store.add(draft("Keep", "Me", Status::Offer, "2024-01-01"));
        let before = store.applications().to_vec();

        assert_eq!(store.import_json("{\"not\":\"an array\"}"), ImportOutcome::Rejected);
        assert_eq!(store.import_json("[oops"), ImportOutcome::Rejected);
        assert_eq!(store.applications(), before.as_slice());
    }

    #[test]
    fn export_then_import_round_trips() {
        let mut store = Store::open(MemorySlot::new());
        store.add(draft("Acme", "Eng", Status::Applied, "2024-01-05"));
        store.add(ApplicationDraft {
            notes: "second round on Friday".into(),
            ..draft("Beta", "PM", Status::Interviewing, "2024-02-01")
        });
        let original = store.applications().to_vec();

        let exported = store.export_json().unwrap();
        let mut other = Store::open(MemorySlot::new());
        other.import_json(&exported);

        assert_eq!(other.applications(), original.as_slice());
    }
}
