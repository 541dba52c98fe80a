//! InMemoryDatasetStore - the whole dataset held in a map
//!
//! Validation happens once, at construction: unique ids, a value for every
//! schema attribute, and at most two distinct labels. Induction can then
//! treat the store as well-formed.

use crate::domain::{ActiveSet, Example, ExampleId, Label, Schema};
use crate::ports::{DatasetStore, ExampleSource, LoadError};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone)]
pub struct InMemoryDatasetStore {
    schema: Schema,
    examples: BTreeMap<ExampleId, Example>,
}

impl InMemoryDatasetStore {
    pub fn new(schema: Schema, examples: Vec<Example>) -> Result<Self, LoadError> {
        let mut by_id = BTreeMap::new();
        let mut labels = BTreeSet::new();
        for example in examples {
            if let Some(attribute) = schema
                .attributes()
                .iter()
                .find(|a| example.value(a).is_none())
            {
                return Err(LoadError::MissingValue {
                    id: example.id(),
                    attribute: attribute.clone(),
                });
            }
            labels.insert(example.label().as_str().to_string());
            let id = example.id();
            if by_id.insert(id, example).is_some() {
                return Err(LoadError::DuplicateId(id));
            }
        }
        if labels.len() > 2 {
            return Err(LoadError::NonBinaryTarget(labels.into_iter().collect()));
        }

        tracing::debug!(
            examples = by_id.len(),
            attributes = schema.attributes().len(),
            "dataset store ready"
        );
        Ok(Self {
            schema,
            examples: by_id,
        })
    }

    /// Bulk load from `source`.
    pub fn load(source: &impl ExampleSource) -> Result<Self, LoadError> {
        let dataset = source.load_examples()?;
        Self::new(dataset.schema, dataset.examples)
    }

    /// Distinct target labels, sorted.
    pub fn labels(&self) -> BTreeSet<&Label> {
        self.examples.values().map(Example::label).collect()
    }
}

impl DatasetStore for InMemoryDatasetStore {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn all_ids(&self) -> ActiveSet {
        self.examples.keys().copied().collect()
    }

    fn get(&self, id: ExampleId) -> Option<&Example> {
        self.examples.get(&id)
    }

    fn len(&self) -> usize {
        self.examples.len()
    }
}
