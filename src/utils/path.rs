//! Path utilities: expand ~, resolve export targets.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Resolve a user-supplied output path; directories get `default_name` appended.
pub fn resolve_output(path: Option<&str>, default_name: &str) -> PathBuf {
    match path {
        None => PathBuf::from(default_name),
        Some(p) => {
            let p = expand_tilde(p);
            if p.is_dir() {
                p.join(default_name)
            } else {
                p
            }
        }
    }
}

pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_name_when_no_path() {
        assert_eq!(resolve_output(None, "out.json"), PathBuf::from("out.json"));
    }

    #[test]
    fn directory_gets_default_name() {
        let dir = std::env::temp_dir();
        let resolved = resolve_output(Some(&dir.to_string_lossy()), "out.json");
        assert_eq!(resolved, dir.join("out.json"));
    }

    #[test]
    fn plain_file_is_kept() {
        assert_eq!(
            resolve_output(Some("backup.json"), "out.json"),
            PathBuf::from("backup.json")
        );
    }
}
