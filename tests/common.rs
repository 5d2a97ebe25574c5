#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use taara_admin::core::AppState;
use taara_admin::db::initialize::open_db;
use taara_admin::db::store::Store;

pub fn tadmin() -> Command {
    cargo_bin_cmd!("taara-admin")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_taara_admin.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_taara_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB through the CLI (test mode: no config file written)
pub fn init_db(db_path: &str) {
    tadmin()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Read the persisted state straight from the store.
pub fn load_state(db_path: &str) -> AppState {
    let store = Store::new(open_db(db_path).expect("open db"));
    AppState::load(&store).expect("load state")
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    for (applicant, animal, date) in [
        ("Daniel Borac", "Milo (Cat)", "2024-03-02"),
        ("Khen Nuarin", "Buddy (Dog)", "2024-05-11"),
        ("Mark Flower", "Luna (Cat)", "2023-11-20"),
    ] {
        tadmin()
            .args([
                "--db",
                db_path,
                "adoption",
                "add",
                "--applicant",
                applicant,
                "--animal",
                animal,
                "--date",
                date,
            ])
            .assert()
            .success();
    }

    tadmin()
        .args([
            "--db", db_path, "donation", "add", "--donor", "Rex Tan", "--amount", "1000",
            "--channel", "gcash", "--date", "2024-05-01",
        ])
        .assert()
        .success();

    tadmin()
        .args([
            "--db", db_path, "donation", "add", "--donor", "Anna Lee", "--amount", "2500",
            "--channel", "bank", "--date", "2024-04-20",
        ])
        .assert()
        .success();
}
