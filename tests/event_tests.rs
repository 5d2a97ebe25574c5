use predicates::str::contains;

mod common;
use common::{init_db, load_state, setup_test_db, tadmin};

#[test]
fn test_event_quick_and_list_sorted() {
    let db_path = setup_test_db("event_quick_sorted");
    init_db(&db_path);

    tadmin()
        .args(["--db", &db_path, "event", "quick", "Adoption Day", "2024-07-01"])
        .assert()
        .success();

    tadmin()
        .args([
            "--db",
            &db_path,
            "event",
            "add",
            "--title",
            "Free Vaccination Drive",
            "--date",
            "2024-06-15",
            "--location",
            "Barangay Hall",
            "--desc",
            "Community pet care day.",
        ])
        .assert()
        .success();

    let output = tadmin()
        .args(["--db", &db_path, "event", "list"])
        .output()
        .expect("run event list");
    let stdout = String::from_utf8_lossy(&output.stdout);

    let drive = stdout.find("Free Vaccination Drive").expect("drive listed");
    let day = stdout.find("Adoption Day").expect("adoption day listed");
    assert!(drive < day);
    assert!(stdout.contains("TBA"));
    assert!(stdout.contains("Barangay Hall"));
}

#[test]
fn test_event_requires_title_and_date() {
    let db_path = setup_test_db("event_requires_title");
    init_db(&db_path);

    tadmin()
        .args(["--db", &db_path, "event", "add", "--date", "2024-06-15"])
        .assert()
        .failure()
        .stderr(contains("Title and date are required"));

    assert!(load_state(&db_path).events.is_empty());
}

#[test]
fn test_event_edit_keeps_unspecified_fields() {
    let db_path = setup_test_db("event_edit");
    init_db(&db_path);

    tadmin()
        .args([
            "--db",
            &db_path,
            "event",
            "add",
            "--title",
            "Fun Run",
            "--date",
            "2024-08-01",
            "--location",
            "Plaza",
            "--desc",
            "5k for the shelter",
        ])
        .assert()
        .success();

    let id = load_state(&db_path)
        .events
        .iter()
        .next()
        .map(|e| e.id.clone())
        .expect("event");

    // Empty stdin: every unspecified field keeps its current value.
    tadmin()
        .args(["--db", &db_path, "event", "edit", &id, "--title", "Fun Run 2024"])
        .assert()
        .success()
        .stdout(contains("Fun Run 2024"));

    let state = load_state(&db_path);
    let ev = state.events.find(&id).expect("edited event");
    assert_eq!(ev.title, "Fun Run 2024");
    assert_eq!(ev.location, "Plaza");
    assert_eq!(ev.desc, "5k for the shelter");
    assert_eq!(ev.id, id);
}

#[test]
fn test_event_delete() {
    let db_path = setup_test_db("event_delete");
    init_db(&db_path);

    tadmin()
        .args(["--db", &db_path, "event", "quick", "Bake Sale", "2024-09-09"])
        .assert()
        .success();

    let id = load_state(&db_path)
        .events
        .iter()
        .next()
        .map(|e| e.id.clone())
        .expect("event");

    tadmin()
        .args(["--db", &db_path, "event", "delete", &id])
        .assert()
        .success();

    assert!(load_state(&db_path).events.is_empty());
}
