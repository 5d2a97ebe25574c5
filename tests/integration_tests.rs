use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::path::Path;
use taara_admin::models::RescueStatus;

mod common;
use common::{init_db, load_state, setup_test_db, tadmin, temp_out};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");

    tadmin()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(Path::new(&db_path).exists());
}

#[test]
fn test_seed_and_dashboard() {
    let db_path = setup_test_db("seed_dashboard");
    init_db(&db_path);

    tadmin()
        .args(["--db", &db_path, "seed"])
        .assert()
        .success()
        .stdout(contains("Sample data loaded."))
        .stdout(contains("Adoptions ["))
        .stdout(contains("Donation statistics"))
        .stdout(contains("Adoptions by year"));

    let state = load_state(&db_path);
    assert_eq!(state.adoptions.len(), 3);
    assert_eq!(state.rescues.len(), 2);
    assert_eq!(state.donations.len(), 3);
    assert_eq!(state.events.len(), 1);
    assert_eq!(state.dues.len(), 2);
    assert_eq!(state.calendar_marks.len(), 3);

    tadmin()
        .args(["--db", &db_path, "dashboard"])
        .assert()
        .success()
        .stdout(contains("Rescue in Malfcot"))
        .stdout(contains("Free Vaccination Drive"))
        .stdout(contains("Anna Lee"))
        .stdout(contains("Daniel Borac • Milo (Cat)"))
        // Only pending applications are queued.
        .stdout(contains("Khen Nuarin").not());
}

#[test]
fn test_rescue_lifecycle() {
    let db_path = setup_test_db("rescue_lifecycle");
    init_db(&db_path);

    tadmin()
        .args([
            "--db",
            &db_path,
            "rescue",
            "add",
            "--reporter",
            "CJ Arrienda",
            "--location",
            "Malfcot",
            "--date",
            "2024-05-10",
        ])
        .assert()
        .success()
        .stdout(contains("urgent"));

    let id = load_state(&db_path)
        .rescues
        .iter()
        .next()
        .map(|r| r.id.clone())
        .expect("rescue");

    tadmin()
        .args(["--db", &db_path, "rescue", "progress", &id])
        .assert()
        .success()
        .stdout(contains("in-progress"));

    tadmin()
        .args(["--db", &db_path, "rescue", "resolve", &id])
        .assert()
        .success();

    assert_eq!(
        load_state(&db_path).rescues.find(&id).map(|r| r.status),
        Some(RescueStatus::Resolved)
    );

    tadmin()
        .args(["--db", &db_path, "rescue", "delete", &id])
        .assert()
        .success();
    assert!(load_state(&db_path).rescues.is_empty());
}

#[test]
fn test_due_done_is_not_persisted() {
    let db_path = setup_test_db("due_done");
    init_db(&db_path);

    tadmin()
        .args(["--db", &db_path, "due", "add", "Call the vet"])
        .assert()
        .success();

    let before = load_state(&db_path);
    let id = before
        .dues
        .iter()
        .next()
        .map(|d| d.id.clone())
        .expect("due item");

    tadmin()
        .args(["--db", &db_path, "due", "done", &id])
        .assert()
        .success()
        .stdout(contains("\u{1b}[2m"));

    assert_eq!(load_state(&db_path), before);

    tadmin()
        .args(["--db", &db_path, "due", "delete", &id])
        .assert()
        .success()
        .stdout(contains("nothing due"));
}

#[test]
fn test_charts_group_by_year_and_month() {
    let db_path = setup_test_db("charts");
    init_db(&db_path);

    for date in ["2023-02-01", "2024-05-02", "2024-05-20"] {
        tadmin()
            .args([
                "--db",
                &db_path,
                "adoption",
                "add",
                "--applicant",
                "A",
                "--animal",
                "B",
                "--date",
                date,
            ])
            .assert()
            .success();
    }

    tadmin()
        .args(["--db", &db_path, "charts", "--year", "2024"])
        .assert()
        .success()
        .stdout(contains("2023 │"))
        .stdout(contains("2024 │"))
        .stdout(contains("Adoptions by month (2024)"))
        .stdout(contains("█ 2"));
}

#[test]
fn test_log_records_mutations() {
    let db_path = setup_test_db("log_mutations");
    init_db(&db_path);

    tadmin()
        .args(["--db", &db_path, "due", "add", "Restock food"])
        .assert()
        .success();

    tadmin()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Due item 'Restock food'"))
        .stdout(contains("Database initialized"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info_check");
    init_db(&db_path);

    tadmin()
        .args(["--db", &db_path, "seed"])
        .assert()
        .success();

    tadmin()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Stored keys"))
        .stdout(contains("adoptions"))
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("backup_compressed");
    init_db(&db_path);

    let out = temp_out("backup_compressed", "sqlite");
    let zip = Path::new(&out).with_extension("zip");
    std::fs::remove_file(&zip).ok();

    tadmin()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success();

    assert!(zip.exists());
    assert!(!Path::new(&out).exists());
}
