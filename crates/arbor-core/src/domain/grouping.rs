//! GroupingTable - attribute → value → label → example ids
//!
//! A derived, disposable view of one ActiveSet. It is rebuilt from scratch
//! after every narrowing and never updated in place.

use super::active_set::ActiveSet;
use super::example::{ExampleId, Label};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// label → ids sharing one (value, label) pair. Never holds an empty set.
pub type LabelBuckets = BTreeMap<Label, BTreeSet<ExampleId>>;

/// Partition of the ActiveSet for a single attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeGroups {
    attribute: String,
    values: BTreeMap<String, LabelBuckets>,
}

impl AttributeGroups {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            values: BTreeMap::new(),
        }
    }

    /// Record `id` under (value, label). Buckets are created on first use.
    pub fn insert(&mut self, value: &str, label: &Label, id: ExampleId) {
        self.values
            .entry(value.to_string())
            .or_default()
            .entry(label.clone())
            .or_default()
            .insert(id);
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn values(&self) -> &BTreeMap<String, LabelBuckets> {
        &self.values
    }

    pub fn buckets(&self, value: &str) -> Option<&LabelBuckets> {
        self.values.get(value)
    }

    /// A value bucket is pure when every example under it has the same label.
    pub fn is_pure(buckets: &LabelBuckets) -> bool {
        buckets.len() <= 1
    }

    /// Values whose buckets still mix labels, in value order.
    pub fn impure_values(&self) -> impl Iterator<Item = (&str, &LabelBuckets)> {
        self.values
            .iter()
            .filter(|(_, buckets)| !Self::is_pure(buckets))
            .map(|(value, buckets)| (value.as_str(), buckets))
    }

    /// Union of every id under `value`, across labels.
    pub fn members(buckets: &LabelBuckets) -> ActiveSet {
        buckets.values().flatten().copied().collect()
    }

    /// Total number of ids across all buckets (duplicates counted).
    pub fn member_count(&self) -> usize {
        self.values
            .values()
            .flat_map(|buckets| buckets.values())
            .map(BTreeSet::len)
            .sum()
    }
}

/// Grouping of one ActiveSet, one entry per attribute in schema order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupingTable {
    active: ActiveSet,
    attributes: Vec<AttributeGroups>,
}

impl GroupingTable {
    pub fn new(active: ActiveSet, attributes: Vec<AttributeGroups>) -> Self {
        Self { active, attributes }
    }

    /// The ActiveSet this table was computed for.
    pub fn active(&self) -> &ActiveSet {
        &self.active
    }

    pub fn get(&self, attribute: &str) -> Option<&AttributeGroups> {
        self.attributes.iter().find(|g| g.attribute == attribute)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeGroups> {
        self.attributes.iter()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// True when the ActiveSet holds a single label.
    pub fn is_pure(&self) -> bool {
        let mut labels = self
            .attributes
            .iter()
            .flat_map(|g| g.values.values())
            .flat_map(|buckets| buckets.keys());
        match labels.next() {
            Some(first) => labels.all(|l| l == first),
            None => true,
        }
    }
}
