// Integration tests for SqliteCaseLoader

mod common;

use casepatch_core::loader::CaseLoader;
use common::{CASE, OTHER_CASE};

#[test]
fn test_loads_only_the_requested_case() {
    let stores = common::seeded_stores();
    let snapshot = common::load_snapshot(&stores, CASE);

    let ids: Vec<i64> = snapshot.groupings.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(snapshot.fees.len(), 2);
    assert_eq!(snapshot.payments.len(), 2);
    assert_eq!(snapshot.remissions.len(), 1);
    assert_eq!(snapshot.apportionments.len(), 2);

    let refunds: Vec<i64> = snapshot.refunds.iter().map(|r| r.id).collect();
    assert_eq!(refunds, vec![501, 502]);
}

#[test]
fn test_refunds_follow_payment_references() {
    let stores = common::seeded_stores();
    let loader = stores.loader();

    let refunds = loader
        .load_refunds(&["RC-1709-9900-0000-0009".to_string()])
        .unwrap();

    assert_eq!(refunds.len(), 1);
    assert_eq!(refunds[0].ccd_case_number.as_deref(), Some(OTHER_CASE));
}

#[test]
fn test_no_references_means_no_refunds() {
    let stores = common::seeded_stores();
    assert!(stores.loader().load_refunds(&[]).unwrap().is_empty());
}

#[test]
fn test_unknown_case_is_empty() {
    let stores = common::seeded_stores();
    let snapshot = common::load_snapshot(&stores, "0000000000000000");
    assert!(snapshot.is_empty());
    assert_eq!(snapshot.row_count(), 0);
}

#[test]
fn test_rows_come_back_ordered_by_id() {
    let stores = common::seeded_stores();
    let snapshot = common::load_snapshot(&stores, CASE);
    assert_eq!(snapshot, snapshot.sorted());
}
