//! Ordered forward and rollback statement streams
//!
//! Forward: moves child-to-parent (apportionment, remission, fee, payment),
//! then deletes child-to-parent (apportionment, remission, refund, fee,
//! payment, grouping). Moves come first so a row leaving a grouping is
//! re-parented before that grouping is deleted.
//!
//! Rollback: the same moves reversed to their captured parent, then
//! re-inserts parent-to-child (grouping, payment, fee, refund, remission,
//! apportionment).

use super::model::{Classified, ClassifiedCase, StoreStatements};
use super::sql::{self, SqlRow};
use crate::model::{GroupedRow, Row, Store};

#[derive(Default)]
struct StreamBuilder {
    out: StoreStatements,
}

impl StreamBuilder {
    fn push(&mut self, store: Store, statement: String) {
        match store {
            Store::Payments => self.out.store1.push(statement),
            Store::Refunds => self.out.store2.push(statement),
        }
    }

    fn forward_moves<T: GroupedRow>(&mut self, rows: &Classified<T>) {
        for m in &rows.moves {
            self.push(
                T::KIND.store(),
                sql::update_parent(T::KIND, m.row.id(), Some(m.to)),
            );
        }
    }

    fn reverse_moves<T: GroupedRow>(&mut self, rows: &Classified<T>) {
        for m in &rows.moves {
            self.push(T::KIND.store(), sql::update_parent(T::KIND, m.row.id(), m.from));
        }
    }

    fn deletes<T: Row>(&mut self, rows: &Classified<T>) {
        for row in &rows.deletes {
            self.push(T::KIND.store(), sql::delete_by_id(T::KIND, row.id()));
        }
    }

    fn inserts<T: SqlRow>(&mut self, rows: &Classified<T>) {
        for row in &rows.deletes {
            self.push(T::KIND.store(), sql::insert(row));
        }
    }

    fn finish(self) -> StoreStatements {
        self.out
    }
}

/// Statements that bring the stores to the desired state
pub fn forward_statements(case: &ClassifiedCase) -> StoreStatements {
    let mut b = StreamBuilder::default();

    b.forward_moves(&case.apportionments);
    b.forward_moves(&case.remissions);
    b.forward_moves(&case.fees);
    b.forward_moves(&case.payments);

    b.deletes(&case.apportionments);
    b.deletes(&case.remissions);
    b.deletes(&case.refunds);
    b.deletes(&case.fees);
    b.deletes(&case.payments);
    b.deletes(&case.groupings);

    b.finish()
}

/// Statements that undo `forward_statements` once it has been applied
pub fn rollback_statements(case: &ClassifiedCase) -> StoreStatements {
    let mut b = StreamBuilder::default();

    b.reverse_moves(&case.apportionments);
    b.reverse_moves(&case.remissions);
    b.reverse_moves(&case.fees);
    b.reverse_moves(&case.payments);

    b.inserts(&case.groupings);
    b.inserts(&case.payments);
    b.inserts(&case.fees);
    b.inserts(&case.refunds);
    b.inserts(&case.remissions);
    b.inserts(&case.apportionments);

    b.finish()
}
