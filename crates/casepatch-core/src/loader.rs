//! Loader contract consumed by the engine
//!
//! Implementations fetch the current rows of a case from the two stores.
//! The payments-store fetch is keyed by case number; the refunds-store fetch
//! is keyed by the payment references found in the first, since refunds are
//! linked by value only.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::model::{ApportionmentRow, FeeRow, GroupingRow, PaymentRow, RefundRow, RemissionRow};

/// The five payments-store collections of a case
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentGraph {
    pub groupings: Vec<GroupingRow>,
    pub fees: Vec<FeeRow>,
    pub payments: Vec<PaymentRow>,
    pub remissions: Vec<RemissionRow>,
    pub apportionments: Vec<ApportionmentRow>,
}

impl PaymentGraph {
    /// Non-null payment references, in payment order, without duplicates
    pub fn payment_references(&self) -> Vec<String> {
        let mut refs: Vec<String> = Vec::new();
        for reference in self.payments.iter().filter_map(|p| p.reference.as_ref()) {
            if !refs.contains(reference) {
                refs.push(reference.clone());
            }
        }
        refs
    }
}

/// Source of current case state
pub trait CaseLoader {
    /// Fetch groupings, fees, payments, remissions and apportionments for a case
    ///
    /// # Errors
    ///
    /// Returns a `Persistence` error when the payments store cannot be read.
    fn load_payment_graph(&self, case_key: &str) -> Result<PaymentGraph>;

    /// Fetch refunds whose `payment_reference` is one of the given references
    ///
    /// # Errors
    ///
    /// Returns a `Persistence` error when the refunds store cannot be read.
    fn load_refunds(&self, payment_references: &[String]) -> Result<Vec<RefundRow>>;
}
