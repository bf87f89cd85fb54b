use crate::core::open_store;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::transfer::ImportOutcome;
use crate::ui::messages::{success, warning};
use crate::utils::path::{display_name, expand_tilde};
use std::fs;

pub struct ImportLogic;

impl ImportLogic {
    /// Replace the collection with the content of `file`.
    ///
    /// Unreadable files are errors; malformed content is not, it simply
    /// leaves the stored applications alone.
    pub fn import(pool: &DbPool, file: &str) -> AppResult<ImportOutcome> {
        let path = expand_tilde(file);
        let bytes = fs::read(&path)?;
        let text = String::from_utf8_lossy(&bytes);

        let mut store = open_store(pool);
        let outcome = store.import_json(&text);

        match outcome {
            ImportOutcome::Rejected => {
                warning(format!(
                    "'{}' is not a JSON array of applications: nothing imported.",
                    path.display()
                ));
            }
            ImportOutcome::Applied { imported, dropped } => {
                ttlog_quiet(
                    &pool.conn,
                    "import",
                    &display_name(&path),
                    &format!("Imported {imported} application(s), skipped {dropped}"),
                );
                success(format!("Imported {imported} application(s)."));
                if dropped > 0 {
                    warning(format!(
                        "Skipped {dropped} entr(ies) missing company, title, status or date."
                    ));
                }
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::ExportLogic;
    use crate::models::{ApplicationDraft, Status};
    use std::env;

    fn temp_file(name: &str) -> String {
        let p = env::temp_dir().join(format!("{name}_jobtracker.json"));
        fs::remove_file(&p).ok();
        p.to_string_lossy().to_string()
    }

    #[test]
    fn export_then_import_into_fresh_db() {
        let source = DbPool::in_memory().unwrap();
        {
            let mut store = open_store(&source);
            store.add(ApplicationDraft {
                company: "Acme".into(),
                title: "Eng".into(),
                status: Status::Offer,
                date: "2024-01-05".into(),
                notes: "negotiating".into(),
            });
        }

        let file = temp_file("core_roundtrip");
        ExportLogic::export(&source, Some(&file), true).unwrap();

        let target = DbPool::in_memory().unwrap();
        let outcome = ImportLogic::import(&target, &file).unwrap();
        assert_eq!(
            outcome,
            ImportOutcome::Applied {
                imported: 1,
                dropped: 0
            }
        );
        assert_eq!(
            open_store(&target).applications(),
            open_store(&source).applications()
        );
        fs::remove_file(&file).ok();
    }

    #[test]
    fn garbage_file_keeps_existing_data() {
        let pool = DbPool::in_memory().unwrap();
        open_store(&pool).add(ApplicationDraft {
            company: "Keep".into(),
            title: "Me".into(),
            date: "2024-01-01".into(),
            ..Default::default()
        });

        let file = temp_file("core_garbage");
        fs::write(&file, "this is not json").unwrap();

        assert_eq!(
            ImportLogic::import(&pool, &file).unwrap(),
            ImportOutcome::Rejected
        );
        assert_eq!(open_store(&pool).len(), 1);
        fs::remove_file(&file).ok();
    }

    #[test]
    fn missing_file_is_an_error() {
        let pool = DbPool::in_memory().unwrap();
        assert!(ImportLogic::import(&pool, &temp_file("core_missing")).is_err());
    }
}
