//! Current-state rows of a case, one struct per persisted table
//!
//! Rows mirror the stored columns one to one. Every field except the
//! surrogate id is optional because the stores allow NULLs there.

pub mod apportionment;
pub mod fee;
pub mod grouping;
pub mod payment;
pub mod refund;
pub mod remission;
pub mod snapshot;

pub use apportionment::ApportionmentRow;
pub use fee::FeeRow;
pub use grouping::GroupingRow;
pub use payment::PaymentRow;
pub use refund::RefundRow;
pub use remission::RemissionRow;
pub use snapshot::CaseSnapshot;

use serde::{Deserialize, Serialize};

/// Store that owns a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Store {
    /// Payments store: groupings, fees, payments, remissions, apportionments
    Payments,
    /// Refunds store
    Refunds,
}

/// The six entity kinds of a case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    Grouping,
    Fee,
    Payment,
    Remission,
    Apportionment,
    Refund,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Grouping,
        EntityKind::Fee,
        EntityKind::Payment,
        EntityKind::Remission,
        EntityKind::Apportionment,
        EntityKind::Refund,
    ];

    /// Persisted table name, as referenced by generated statements
    pub fn table(&self) -> &'static str {
        match self {
            EntityKind::Grouping => "payment_fee_link",
            EntityKind::Fee => "fee",
            EntityKind::Payment => "payment",
            EntityKind::Remission => "remission",
            EntityKind::Apportionment => "fee_pay_apportion",
            EntityKind::Refund => "refunds",
        }
    }

    pub fn store(&self) -> Store {
        match self {
            EntityKind::Refund => Store::Refunds,
            _ => Store::Payments,
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Grouping => "grouping",
            EntityKind::Fee => "fee",
            EntityKind::Payment => "payment",
            EntityKind::Remission => "remission",
            EntityKind::Apportionment => "apportionment",
            EntityKind::Refund => "refund",
        };
        f.write_str(name)
    }
}

/// Parent-grouping column mutated by a move
pub const PARENT_COLUMN: &str = "payment_link_id";

/// A persisted row with a surrogate id
pub trait Row {
    const KIND: EntityKind;

    /// Column names in stored order
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> i64;
}

/// A row owned by a grouping through `payment_link_id`
pub trait GroupedRow: Row {
    fn payment_link_id(&self) -> Option<i64>;
}
