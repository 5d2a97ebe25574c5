use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, init_db_with_data, load_state, setup_test_db, tadmin, temp_out};

#[test]
fn test_export_then_import_restores_state() {
    let db_path = setup_test_db("export_import_roundtrip");
    init_db_with_data(&db_path);

    tadmin()
        .args(["--db", &db_path, "calendar", "mark", "2024-05-10", "event"])
        .assert()
        .success();

    let out = temp_out("export_import_roundtrip", "json");
    tadmin()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let exported = load_state(&db_path);

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"calendarMarks\""));
    assert!(content.contains("\"submitted\": \"2024-03-02\""));

    // Wipe everything, then import the file into the empty store.
    tadmin()
        .args(["--db", &db_path, "db", "--reset", "--yes"])
        .assert()
        .success();
    assert!(load_state(&db_path).adoptions.is_empty());

    tadmin()
        .args(["--db", &db_path, "import", "--file", &out])
        .assert()
        .success()
        .stdout(contains("6 collections replaced"));

    assert_eq!(load_state(&db_path), exported);
}

#[test]
fn test_import_malformed_file_leaves_state() {
    let db_path = setup_test_db("import_malformed");
    init_db_with_data(&db_path);
    let before = load_state(&db_path);

    let bad = temp_out("import_malformed", "json");
    fs::write(&bad, "{ this is not json").expect("write bad file");

    tadmin()
        .args(["--db", &db_path, "import", "--file", &bad])
        .assert()
        .failure()
        .stderr(contains("Invalid JSON file"));

    assert_eq!(load_state(&db_path), before);
}

#[test]
fn test_import_partial_file_keeps_missing_collections() {
    let db_path = setup_test_db("import_partial");
    init_db_with_data(&db_path);
    let before = load_state(&db_path);

    let partial = temp_out("import_partial", "json");
    fs::write(
        &partial,
        r#"{ "dues": [ { "id": "abc1234", "text": "Buy kibble" } ] }"#,
    )
    .expect("write partial file");

    tadmin()
        .args(["--db", &db_path, "import", "--file", &partial])
        .assert()
        .success()
        .stdout(contains("Buy kibble"));

    let after = load_state(&db_path);
    assert_eq!(after.adoptions, before.adoptions);
    assert_eq!(after.donations, before.donations);
    assert_eq!(after.dues.len(), 1);
    assert!(after.dues.find("abc1234").is_some());
}

#[test]
fn test_export_csv_collection() {
    let db_path = setup_test_db("export_csv_donations");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv_donations", "csv");
    tadmin()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--collection",
            "donations",
            "--file",
            &out,
        ])
        .assert()
        .success()
        .stdout(contains("2 rows"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,donor,amount,channel,date"));
    assert!(content.contains("Anna Lee"));
    assert!(content.contains("GCash"));
}

#[test]
fn test_export_csv_requires_collection() {
    let db_path = setup_test_db("export_csv_no_collection");
    init_db(&db_path);

    let out = temp_out("export_csv_no_collection", "csv");
    tadmin()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("--collection is required"));
}

#[test]
fn test_export_does_not_overwrite_without_force() {
    let db_path = setup_test_db("export_no_overwrite");
    init_db(&db_path);

    let out = temp_out("export_no_overwrite", "json");
    fs::write(&out, "keep me").expect("write existing file");

    tadmin()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    tadmin()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read").contains("adoptions"));
}

#[test]
fn test_import_renders_every_view() {
    let db_path = setup_test_db("import_renders_all");
    init_db_with_data(&db_path);

    let out = temp_out("import_renders_all", "json");
    tadmin()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success();

    tadmin()
        .args(["--db", &db_path, "import", "--file", &out])
        .assert()
        .success()
        .stdout(contains("── Due ──"))
        .stdout(contains("Calendar "))
        .stdout(contains("Adoptions ["))
        .stdout(contains("── Rescues ──"))
        .stdout(contains("── Donations ──"))
        .stdout(contains("Donation statistics"))
        .stdout(contains("── Events ──"))
        .stdout(contains("Adoptions by year"))
        .stdout(contains("Adoptions by month"));
}

#[test]
fn test_import_non_utf8_file_is_invalid_json() {
    let db_path = setup_test_db("import_non_utf8");
    init_db_with_data(&db_path);
    let before = load_state(&db_path);

    let bad = temp_out("import_non_utf8", "json");
    fs::write(&bad, [0xff_u8, 0xfe, 0x7b, 0x80, 0x00]).expect("write bad file");

    tadmin()
        .args(["--db", &db_path, "import", "--file", &bad])
        .assert()
        .failure()
        .stderr(contains("Import failed: Invalid JSON file"));

    assert_eq!(load_state(&db_path), before);
}
