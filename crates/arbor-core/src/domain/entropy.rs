//! EntropyTable - attribute → entropy for one ActiveSet.

use serde::Serialize;

/// Entropy of a single attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeEntropy {
    pub attribute: String,
    pub entropy: f64,
}

/// Per-attribute entropies, in the same (schema) order as the GroupingTable
/// they were derived from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EntropyTable {
    entries: Vec<AttributeEntropy>,
}

impl EntropyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, attribute: impl Into<String>, entropy: f64) {
        self.entries.push(AttributeEntropy {
            attribute: attribute.into(),
            entropy,
        });
    }

    pub fn get(&self, attribute: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.attribute == attribute)
            .map(|e| e.entropy)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeEntropy> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lowest-entropy attribute for which `excluded` is false.
    ///
    /// Comparison is strict, so the first attribute in table order wins a tie.
    pub fn min_excluding(&self, excluded: impl Fn(&str) -> bool) -> Option<&AttributeEntropy> {
        let mut best: Option<&AttributeEntropy> = None;
        for entry in self.entries.iter().filter(|e| !excluded(&e.attribute)) {
            match best {
                Some(current) if entry.entropy >= current.entropy => {}
                _ => best = Some(entry),
            }
        }
        best
    }
}
