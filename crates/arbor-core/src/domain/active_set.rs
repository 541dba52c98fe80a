//! ActiveSet - the working subset of example ids for one branch.
//!
//! Narrowing the tree ("follow this branch") never deletes anything from the
//! store. A branch just carries a smaller ActiveSet.

use super::example::ExampleId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveSet(BTreeSet<ExampleId>);

impl ActiveSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: ExampleId) -> bool {
        self.0.contains(&id)
    }

    pub fn insert(&mut self, id: ExampleId) -> bool {
        self.0.insert(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = ExampleId> + '_ {
        self.0.iter().copied()
    }

    pub fn is_subset(&self, other: &ActiveSet) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Keep only the ids that are also in `branch`.
    ///
    /// The result is always a subset of `self`.
    pub fn restrict_to<'a>(&self, branch: impl IntoIterator<Item = &'a ExampleId>) -> ActiveSet {
        branch
            .into_iter()
            .copied()
            .filter(|id| self.0.contains(id))
            .collect()
    }
}

impl FromIterator<ExampleId> for ActiveSet {
    fn from_iter<I: IntoIterator<Item = ExampleId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ActiveSet {
    type Item = &'a ExampleId;
    type IntoIter = std::collections::btree_set::Iter<'a, ExampleId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
