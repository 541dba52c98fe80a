//! DatasetStore port - read-only lookup of examples by id
//!
//! The store is never mutated by induction. Following a branch of the tree
//! means querying with a smaller ActiveSet, not deleting rows.

use crate::domain::{ActiveSet, Example, ExampleId, InductionError, Schema};

/// DatasetStore は例題の正本（source of truth）
pub trait DatasetStore {
    fn schema(&self) -> &Schema;

    /// Every id held by the store; the root ActiveSet of a run.
    fn all_ids(&self) -> ActiveSet;

    fn get(&self, id: ExampleId) -> Option<&Example>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Examples restricted to the ids in `active`, in id order.
    ///
    /// Fails on the first id the store does not hold.
    fn query_active_examples(&self, active: &ActiveSet) -> Result<Vec<&Example>, InductionError> {
        active
            .iter()
            .map(|id| self.get(id).ok_or(InductionError::UnknownIdentifier(id)))
            .collect()
    }
}
