// Integration tests for seed fixtures

mod common;

use casepatch_store::seed::{import_seed, parse_seed_file, parse_seed_str};
use casepatch_store::Stores;
use common::{fixtures_dir, CASE, OTHER_CASE};

fn count(conn: &rusqlite::Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))
        .unwrap()
}

#[test]
fn test_parse_fixture_file() {
    let fixture = parse_seed_file(&fixtures_dir().join("seed_case.yaml")).unwrap();

    assert_eq!(fixture.payment_fee_links.len(), 3);
    assert_eq!(fixture.payments[0].payer_name.as_deref(), Some("O'Brien"));
    assert_eq!(fixture.fees[1].volume, Some(2));
}

#[test]
fn test_import_writes_both_stores() {
    let mut stores = Stores::open_in_memory().unwrap();
    let report = import_seed(&fixtures_dir().join("seed_case.yaml"), &mut stores).unwrap();

    assert_eq!(report.payment_fee_links, 3);
    assert_eq!(report.refunds, 3);
    assert_eq!(report.total(), 15);
    assert_eq!(count(&stores.payments, "payment_fee_link"), 3);
    assert_eq!(count(&stores.payments, "fee_pay_apportion"), 2);
    assert_eq!(count(&stores.refunds, "refunds"), 3);
}

#[test]
fn test_imported_values_load_back() {
    let stores = common::seeded_stores();
    let snapshot = common::load_snapshot(&stores, CASE);

    let payment = &snapshot.payments[0];
    assert_eq!(payment.id, 201);
    assert_eq!(payment.amount.map(|d| d.to_string()).as_deref(), Some("593"));
    assert_eq!(
        payment.date_created.map(|ts| ts.to_string()).as_deref(),
        Some("2024-03-05 09:35:12.120")
    );
    assert_eq!(payment.payer_name.as_deref(), Some("O'Brien"));
    assert_eq!(snapshot.fees[1].volume, Some(2));
}

#[test]
fn test_digest_is_stable_across_imports() {
    let path = fixtures_dir().join("seed_case.yaml");
    let mut first = Stores::open_in_memory().unwrap();
    let mut second = Stores::open_in_memory().unwrap();

    let a = import_seed(&path, &mut first).unwrap();
    let b = import_seed(&path, &mut second).unwrap();

    assert_eq!(a.digest, b.digest);
}

#[test]
fn test_invalid_fixture_writes_nothing() {
    let mut stores = Stores::open_in_memory().unwrap();
    let mut broken = parse_seed_str(&format!(
        "payment_fee_links:\n  - id: 1\n    ccd_case_number: \"{}\"\n",
        OTHER_CASE
    ))
    .unwrap();
    broken.fees = vec![Default::default(), Default::default()];

    let err = casepatch_store::seed::import_fixture(&broken, &mut stores).unwrap_err();

    assert_eq!(err.code(), "ERR_INVALID_INPUT");
    assert_eq!(count(&stores.payments, "payment_fee_link"), 0);
}

#[test]
fn test_refund_conflict_leaves_payments_store_untouched() {
    let mut stores = Stores::open_in_memory().unwrap();
    let first = parse_seed_str(&format!(
        "payment_fee_links:\n  - id: 1\n    ccd_case_number: \"{case}\"\n\
         refunds:\n  - id: 9\n    payment_reference: \"RC-1\"\n",
        case = OTHER_CASE
    ))
    .unwrap();
    casepatch_store::seed::import_fixture(&first, &mut stores).unwrap();

    let second = parse_seed_str(&format!(
        "payment_fee_links:\n  - id: 2\n    ccd_case_number: \"{case}\"\n\
         refunds:\n  - id: 9\n    payment_reference: \"RC-2\"\n",
        case = OTHER_CASE
    ))
    .unwrap();
    let err = casepatch_store::seed::import_fixture(&second, &mut stores).unwrap_err();

    assert_eq!(err.code(), "ERR_PERSISTENCE");
    assert_eq!(err.entity(), Some("refund:9"));
    assert_eq!(count(&stores.payments, "payment_fee_link"), 1);
    assert_eq!(count(&stores.refunds, "refunds"), 1);

    // nothing half-written, so a corrected retry goes through
    let mut retry = second.clone();
    retry.refunds[0].id = 10;
    casepatch_store::seed::import_fixture(&retry, &mut stores).unwrap();
    assert_eq!(count(&stores.payments, "payment_fee_link"), 2);
    assert_eq!(count(&stores.refunds, "refunds"), 2);
}
