//! Embedded SQL migrations
//!
//! Migrations are embedded at compile time using include_str!

use casepatch_core::model::Store;

/// Migration metadata
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

/// All migrations for a store, in apply order
pub fn get_migrations(store: Store) -> Vec<Migration> {
    match store {
        Store::Payments => vec![Migration {
            id: "001_initial_schema",
            sql: include_str!("../../migrations/payments/001_initial_schema.sql"),
        }],
        Store::Refunds => vec![Migration {
            id: "001_initial_schema",
            sql: include_str!("../../migrations/refunds/001_initial_schema.sql"),
        }],
    }
}
