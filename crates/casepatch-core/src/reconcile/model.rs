//! Reconciliation output types
//!
//! Serialized camelCase to match the result bundle shown to operators.

use serde::{Deserialize, Serialize};

use super::summary::ChangeSummary;
use crate::model::{ApportionmentRow, FeeRow, GroupingRow, PaymentRow, RefundRow, RemissionRow};

/// A row re-parented to a different grouping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Move<T> {
    pub row: T,
    /// Parent grouping id before the move, as captured at classification
    pub from: Option<i64>,
    pub to: i64,
}

/// Disjoint classification of one entity kind, in input order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classified<T> {
    pub keep: Vec<T>,
    pub moves: Vec<Move<T>>,
    pub deletes: Vec<T>,
}

impl<T> Default for Classified<T> {
    fn default() -> Self {
        Self {
            keep: Vec::new(),
            moves: Vec::new(),
            deletes: Vec::new(),
        }
    }
}

impl<T> Classified<T> {
    /// Number of rows across all three lists
    pub fn len(&self) -> usize {
        self.keep.len() + self.moves.len() + self.deletes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classification of every current row of a case
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClassifiedCase {
    pub groupings: Classified<GroupingRow>,
    pub fees: Classified<FeeRow>,
    pub payments: Classified<PaymentRow>,
    pub remissions: Classified<RemissionRow>,
    pub apportionments: Classified<ApportionmentRow>,
    pub refunds: Classified<RefundRow>,
}

/// Ordered statements for each store
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoreStatements {
    /// Payments store
    pub store1: Vec<String>,
    /// Refunds store
    pub store2: Vec<String>,
}

impl StoreStatements {
    pub fn is_empty(&self) -> bool {
        self.store1.is_empty() && self.store2.is_empty()
    }

    pub fn len(&self) -> usize {
        self.store1.len() + self.store2.len()
    }
}

/// Result bundle of one reconciliation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciliationResult {
    pub forward_statements: StoreStatements,
    pub rollback_statements: StoreStatements,
    pub summary: ChangeSummary,
}

impl ReconciliationResult {
    /// True when the desired state already matches the stores
    pub fn is_noop(&self) -> bool {
        self.forward_statements.is_empty()
            && self.rollback_statements.is_empty()
            && self.summary.is_zero()
    }
}
