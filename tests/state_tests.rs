use chrono::NaiveDate;
use std::io::Cursor;
use taara_admin::core::AppState;
use taara_admin::core::adoption::AdoptionLogic;
use taara_admin::core::calendar::{CalendarCursor, CalendarLogic};
use taara_admin::core::donation::DonationLogic;
use taara_admin::core::seed::sample_state;
use taara_admin::core::stats;
use taara_admin::core::transfer::{self, StateImport};
use taara_admin::db::initialize::init_db;
use taara_admin::db::pool::DbPool;
use taara_admin::db::store::Store;
use taara_admin::errors::AppError;
use std::fmt::Debug;
use taara_admin::core::collection::Collection;
use taara_admin::models::{
    Adoption, AdoptionFilter, AdoptionStatus, Channel, Donation, Due, Event, MarkType, Record,
    Rescue, RescueStatus,
};
use taara_admin::render;
use taara_admin::ui::modal::{Field, FormValues, Modal};
use taara_admin::utils::formatting::format_amount;

fn memory_store() -> Store {
    let pool = DbPool::in_memory().expect("in-memory db");
    init_db(&pool.conn).expect("schema");
    Store::new(pool)
}

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date")
}

fn sample() -> AppState {
    sample_state(d("2024-05-15"))
}

#[test]
fn store_get_falls_back_on_missing_null_and_corrupt() {
    let store = memory_store();

    let missing: Vec<String> = store.get("nope", vec!["x".into()]).expect("get");
    assert_eq!(missing, vec!["x".to_string()]);

    store.set("adoptions", &serde_json::Value::Null).expect("set");
    let null: Vec<String> = store.get("adoptions", Vec::new()).expect("get");
    assert!(null.is_empty());

    store
        .pool
        .conn
        .execute(
            "INSERT INTO kv (key, value, updated_at) VALUES ('dues', '{broken', datetime('now'))",
            [],
        )
        .expect("raw insert");
    let state = AppState::load(&store).expect("load");
    assert!(state.dues.is_empty());
}

#[test]
fn persist_then_load_is_identity() {
    let store = memory_store();
    let state = sample();

    state.persist(&store).expect("persist");
    let loaded = AppState::load(&store).expect("load");

    assert_eq!(loaded, state);
    assert_eq!(store.keys().expect("keys").len(), 6);
}

#[test]
fn export_then_import_restores_state() {
    let original = sample();
    let json = transfer::to_json(&original).expect("json");

    let mut target = AppState::default();
    let replaced = StateImport::parse(&json)
        .expect("parse")
        .merge_into(&mut target);

    assert_eq!(replaced.len(), 6);
    assert_eq!(target, original);
}

#[test]
fn partial_import_keeps_other_collections() {
    let mut state = sample();
    let before = state.clone();

    let replaced = StateImport::parse(r#"{ "donations": [], "unknown": 1 }"#)
        .expect("parse")
        .merge_into(&mut state);

    assert_eq!(replaced, vec!["donations"]);
    assert!(state.donations.is_empty());
    assert_eq!(state.adoptions, before.adoptions);
    assert_eq!(state.calendar_marks, before.calendar_marks);
}

#[test]
fn malformed_import_is_rejected() {
    let err = StateImport::parse("[1, 2").unwrap_err();
    assert!(matches!(err, AppError::Import(ref m) if m == "Invalid JSON file"));
}

#[test]
fn donation_total_grows_by_new_amount() {
    let mut state = sample();
    let before = stats::donation_total(&state);

    DonationLogic::create(&mut state, "Juan", "500", "", "2024-05-20").expect("create");

    assert_eq!(stats::donation_total(&state), before + 500.0);
    let last = state.donations.iter().last().expect("donation");
    assert_eq!(last.channel.as_str(), "GCash");
}

#[test]
fn donation_amount_must_be_positive() {
    let mut state = AppState::default();
    for bad in ["0", "-5", "abc", ""] {
        assert!(DonationLogic::create(&mut state, "Juan", bad, "cash", "2024-05-20").is_err());
    }
    assert!(state.donations.is_empty());
}

#[test]
fn group_by_month_counts_records() {
    let mut state = AppState::default();
    for date in ["2024-05-01", "2024-05-20", "2024-04-02"] {
        DonationLogic::create(&mut state, "X", "100", "bank", date).expect("create");
    }

    let grouped = stats::group_by_month(&state);
    assert_eq!(grouped.get("2024-05"), Some(&2));
    assert_eq!(grouped.get("2024-04"), Some(&1));
    assert_eq!(stats::months_active(&state), 2);
}

#[test]
fn adoptions_by_month_buckets_by_year() {
    let mut state = AppState::default();
    for date in ["2024-01-10", "2024-01-30", "2024-12-01", "2023-01-05"] {
        AdoptionLogic::create(&mut state, "A", "B", date).expect("create");
    }

    let months = stats::adoptions_by_month(&state, 2024);
    assert_eq!(months[0], 2);
    assert_eq!(months[11], 1);
    assert_eq!(months.iter().sum::<u32>(), 3);

    let years = stats::adoptions_by_year(&state);
    assert_eq!(years.get(&2023), Some(&1));
    assert_eq!(years.get(&2024), Some(&3));
}

#[test]
fn approve_is_idempotent_and_filter_matches() {
    let mut state = AppState::default();
    let id = AdoptionLogic::create(&mut state, "Ana", "Milo", "2024-05-01").expect("create");
    AdoptionLogic::create(&mut state, "Ben", "Rex", "2024-05-02").expect("create");

    assert!(AdoptionLogic::approve(&mut state, &id).expect("approve"));
    let once = state.clone();
    assert!(!AdoptionLogic::approve(&mut state, &id).expect("approve"));
    assert_eq!(state, once);

    let approved = AdoptionLogic::filter(&state, AdoptionFilter::Only(AdoptionStatus::Approved));
    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0].id, id);
    assert_eq!(AdoptionLogic::filter(&state, AdoptionFilter::All).len(), 2);
}

#[test]
fn unknown_id_is_not_found() {
    let mut state = sample();
    let err = AdoptionLogic::delete(&mut state, "zzzzzzz").unwrap_err();
    assert!(matches!(err, AppError::NotFound { kind: "adoption", .. }));
    assert_eq!(state.adoptions.len(), 3);
}

#[test]
fn generated_ids_are_unique() {
    let mut state = AppState::default();
    for _ in 0..200 {
        AdoptionLogic::create(&mut state, "A", "B", "2024-01-01").expect("create");
    }
    let mut ids: Vec<&str> = state.adoptions.iter().map(|a| a.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 200);
    assert!(ids.iter().all(|id| id.len() == 7));
}

#[test]
fn unmark_removes_only_exact_pair() {
    let mut state = AppState::default();
    let day = d("2024-05-10");
    CalendarLogic::mark(&mut state, day, MarkType::Due);
    CalendarLogic::mark(&mut state, day, MarkType::Due);
    CalendarLogic::mark(&mut state, day, MarkType::Event);

    assert_eq!(CalendarLogic::unmark(&mut state, day, MarkType::Due).expect("unmark"), 2);
    let left = CalendarLogic::marks_on(&state, day);
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].kind, MarkType::Event);

    assert!(CalendarLogic::unmark(&mut state, day, MarkType::Rescue).is_err());
}

#[test]
fn cursor_wraps_years_and_persists() {
    let dec = CalendarCursor::new(2024, 12).expect("cursor");
    assert_eq!(dec.next().label(), "2025-01");
    assert_eq!(dec.next().prev(), dec);
    assert_eq!(CalendarCursor::new(2024, 1).expect("cursor").prev().label(), "2023-12");
    assert!(CalendarCursor::new(2024, 13).is_err());
    assert!(CalendarCursor::parse("2024-13").is_err());

    // May 2024 starts on a Wednesday.
    let may = CalendarCursor::parse("2024-05").expect("parse");
    assert_eq!(may.leading_blanks(), 2);
    assert_eq!(may.days().len(), 31);

    let store = memory_store();
    may.save(&store).expect("save");
    assert_eq!(CalendarCursor::load(&store).expect("load"), may);
}

#[test]
fn renderers_are_deterministic() {
    let state = sample();
    let cursor = CalendarCursor::parse("2024-05").expect("cursor");

    assert_eq!(
        render::calendar(&state, cursor),
        render::calendar(&state, cursor)
    );
    assert_eq!(render::events(&state), render::events(&state));
    assert_eq!(
        render::donation_stats(&state, "₱"),
        render::donation_stats(&state, "₱")
    );
    assert!(render::donation_stats(&state, "₱").contains("₱4,000"));
}

#[test]
fn modal_reads_only_missing_fields() {
    let fields = [
        Field::new("donor", "Donor"),
        Field::new("amount", "Amount"),
        Field::new("channel", "Channel").with_default("GCash"),
    ];
    let mut given = FormValues::default();
    given.set("donor", "  Rex Tan ");

    let input = Cursor::new("1500\n\n");
    let mut modal = Modal::new(input, Vec::new());
    let form = modal
        .open("New Donation", &fields, given)
        .expect("open");

    assert!(modal.is_open());
    assert_eq!(form.get("donor"), "Rex Tan");
    assert_eq!(form.get("amount"), "1500");
    assert_eq!(form.get("channel"), "GCash");

    modal.close();
    assert!(!modal.is_open());
}

#[test]
fn amounts_use_thousands_separators() {
    assert_eq!(format_amount(2500.0), "2,500");
    assert_eq!(format_amount(1234567.0), "1,234,567");
    assert_eq!(format_amount(1234.5), "1,234.5");
    assert_eq!(format_amount(999.0), "999");
}

#[test]
fn append_find_and_remove_by_id() {
    let mut state = sample();
    let before = state.rescues.len();

    let id = state.rescues.next_id();
    let record = Rescue::new(id.clone(), "Joan".into(), "Carafiq".into(), d("2024-05-01"));
    let returned = state.rescues.append(record.clone());

    assert_eq!(returned, id);
    assert_eq!(state.rescues.find(&id), Some(&record));
    assert_eq!(record.status, RescueStatus::Urgent);

    let removed = state.rescues.remove(&id).expect("remove");
    assert_eq!(removed, record);
    assert!(state.rescues.find(&id).is_none());
    assert_eq!(state.rescues.len(), before);
    assert!(state.rescues.remove(&id).is_err());
}

/// Append `record`, find it by the returned id, then remove it again.
fn check_append_find_remove<T>(coll: &mut Collection<T>, record: T)
where
    T: Record + Clone + PartialEq + Debug,
{
    let before = coll.len();

    let id = coll.append(record.clone());
    assert_eq!(coll.find(&id), Some(&record));
    assert_eq!(coll.len(), before + 1);

    assert_eq!(coll.remove(&id).expect("remove"), record);
    assert!(coll.find(&id).is_none());
    assert_eq!(coll.len(), before);
}

#[test]
fn every_collection_appends_finds_and_removes() {
    let mut state = sample();
    let before = state.clone();

    let id = state.adoptions.next_id();
    let adoption = Adoption::new(id, "Ana".into(), "Milo".into(), d("2024-05-01"));
    check_append_find_remove(&mut state.adoptions, adoption);

    let id = state.donations.next_id();
    let donation = Donation {
        id,
        donor: "Rex Tan".into(),
        amount: 750.0,
        channel: Channel::Cash,
        date: d("2024-05-02"),
    };
    check_append_find_remove(&mut state.donations, donation);

    let id = state.events.next_id();
    let event = Event {
        id,
        title: "Adoption Day".into(),
        date: d("2024-06-01"),
        location: String::new(),
        desc: String::new(),
    };
    check_append_find_remove(&mut state.events, event);

    let id = state.dues.next_id();
    let due = Due {
        id,
        text: "Buy kibble".into(),
    };
    check_append_find_remove(&mut state.dues, due);

    let id = state.rescues.next_id();
    let rescue = Rescue::new(id, "Joan".into(), "Carafiq".into(), d("2024-05-03"));
    check_append_find_remove(&mut state.rescues, rescue);

    assert_eq!(state, before);
}
