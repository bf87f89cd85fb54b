use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::ask_confirmation;
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, optionally as a `.zip`.
    ///
    /// Returns the final backup path, or `None` if the user declined to
    /// overwrite an existing file.
    pub fn backup(database: &str, dest_file: &str, compress: bool) -> AppResult<Option<PathBuf>> {
        let src = Path::new(database);
        let dest = expand_tilde(dest_file);

        // 1️⃣ Check DB exists
        if !src.exists() {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Existing destination → ask confirmation
        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.clone()
        };
        if final_target.exists()
            && !ask_confirmation(&format!(
                "The file '{}' already exists. Overwrite it?",
                final_target.display()
            ))
        {
            info("Backup cancelled.");
            return Ok(None);
        }

        // 4️⃣ Copy or compress
        let final_path = if compress {
            compress_backup(src, &final_target)?
        } else {
            fs::copy(src, &dest)?;
            dest
        };
        success(format!("Backup created: {}", final_path.display()));

        // 5️⃣ Log in DB
        match DbPool::new(database) {
            Ok(pool) => ttlog_quiet(
                &pool.conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            ),
            Err(e) => warning(format!("Backup not recorded in the internal log: {e}")),
        }

        Ok(Some(final_path))
    }
}

/// Write `src` into a fresh zip archive at `zip_path`.
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<PathBuf> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "jobtracker.sqlite".to_string());

    let mut f = fs::File::open(src)?;
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(zip_path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_db(name: &str) -> String {
        let p = env::temp_dir().join(format!("{name}_jobtracker.sqlite"));
        fs::remove_file(&p).ok();
        let db = p.to_string_lossy().to_string();
        DbPool::new(&db).unwrap();
        db
    }

    #[test]
    fn plain_copy() {
        let db = temp_db("backup_plain");
        let dest = env::temp_dir().join("backup_plain_copy.sqlite");
        fs::remove_file(&dest).ok();

        let out = BackupLogic::backup(&db, &dest.to_string_lossy(), false)
            .unwrap()
            .unwrap();
        assert_eq!(out, dest);
        assert!(dest.exists());
        fs::remove_file(&dest).ok();
    }

    #[test]
    fn compressed_copy_gets_zip_extension() {
        let db = temp_db("backup_zip");
        let dest = env::temp_dir().join("backup_zip_copy.sqlite");
        let zip_path = dest.with_extension("zip");
        fs::remove_file(&zip_path).ok();

        let out = BackupLogic::backup(&db, &dest.to_string_lossy(), true)
            .unwrap()
            .unwrap();
        assert_eq!(out, zip_path);
        assert!(zip_path.exists());
        assert!(!dest.exists());
        fs::remove_file(&zip_path).ok();
    }

    #[test]
    fn missing_database_is_an_error() {
        let missing = env::temp_dir().join("backup_missing_db.sqlite");
        fs::remove_file(&missing).ok();
        assert!(BackupLogic::backup(&missing.to_string_lossy(), "/tmp/never.sqlite", false).is_err());
    }
}
