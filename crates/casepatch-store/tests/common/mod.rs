//! Shared helpers for the store integration tests

use std::path::PathBuf;

use casepatch_core::loader::CaseLoader;
use casepatch_core::model::CaseSnapshot;
use casepatch_core::reconcile::StoreStatements;
use casepatch_store::Stores;

pub const CASE: &str = "1234567890123456";
pub const OTHER_CASE: &str = "6543210987654321";

#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Both stores in memory with the standard fixture imported
#[allow(dead_code)]
pub fn seeded_stores() -> Stores {
    let mut stores = Stores::open_in_memory().unwrap();
    casepatch_store::seed::import_seed(&fixtures_dir().join("seed_case.yaml"), &mut stores)
        .unwrap();
    stores
}

/// Current state of a case, the way the engine assembles it
#[allow(dead_code)]
pub fn load_snapshot(stores: &Stores, case_key: &str) -> CaseSnapshot {
    let loader = stores.loader();
    let graph = loader.load_payment_graph(case_key).unwrap();
    let refunds = loader.load_refunds(&graph.payment_references()).unwrap();
    CaseSnapshot::from_parts(graph, refunds)
}

/// Run a statement bundle against the stores it targets
#[allow(dead_code)]
pub fn execute(stores: &Stores, statements: &StoreStatements) {
    stores
        .payments
        .execute_batch(&statements.store1.join("\n"))
        .unwrap();
    stores
        .refunds
        .execute_batch(&statements.store2.join("\n"))
        .unwrap();
}
