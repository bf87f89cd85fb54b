#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn jt() -> Command {
    let mut cmd = cargo_bin_cmd!("jobtracker");
    // keep the user's real config out of the picture
    cmd.env("HOME", env::temp_dir().join("jobtracker_test_home"));
    cmd.env("APPDATA", env::temp_dir().join("jobtracker_test_home"));
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_jobtracker.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    jt().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    jt().args([
        "--db",
        db_path,
        "add",
        "Acme",
        "Backend Engineer",
        "--status",
        "Applied",
        "--date",
        "2024-01-05",
    ])
    .assert()
    .success();

    jt().args([
        "--db",
        db_path,
        "add",
        "Beta",
        "Product Manager",
        "--status",
        "Offer",
        "--date",
        "2024-02-01",
        "--notes",
        "Signing bonus on the table",
    ])
    .assert()
    .success();
}

/// Read the stored applications straight from the database.
pub fn stored(db_path: &str) -> Vec<jobtracker::JobApplication> {
    let pool = jobtracker::db::pool::DbPool::new(db_path).expect("open db");
    jobtracker::core::open_store(&pool).applications().to_vec()
}

/// Id of the stored application for `company`.
pub fn id_of(db_path: &str, company: &str) -> String {
    stored(db_path)
        .into_iter()
        .find(|a| a.company == company)
        .map(|a| a.id)
        .expect("application present")
}
