//! Example - labelled observations and the schema they share.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of one Example (the `num` column of the source table).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExampleId(u32);

impl ExampleId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ExampleId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for ExampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Target label of an Example (e.g. "T" / "F").
///
/// The dataset is binary: loaders reject a third distinct label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One labelled observation. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    id: ExampleId,
    values: BTreeMap<String, String>,
    label: Label,
}

impl Example {
    pub fn new(id: ExampleId, values: BTreeMap<String, String>, label: Label) -> Self {
        Self { id, values, label }
    }

    /// Builder-style helper, mostly for fixtures.
    ///
    /// ```ignore
    /// let e = Example::from_pairs(1, &[("color", "red")], "T");
    /// ```
    pub fn from_pairs(id: u32, values: &[(&str, &str)], label: &str) -> Self {
        let values = values
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self::new(ExampleId::new(id), values, Label::new(label))
    }

    pub fn id(&self) -> ExampleId {
        self.id
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Categorical value of `attribute`, if the example carries one.
    pub fn value(&self, attribute: &str) -> Option<&str> {
        self.values.get(attribute).map(String::as_str)
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }
}

/// Schema is the fixed layout of a dataset.
///
/// # Attribute order
/// `attributes` keeps the column order of the source. Entropy ties are broken
/// by this order, so it must never be re-sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    id_column: String,
    target_column: String,
    attributes: Vec<String>,
}

impl Schema {
    pub fn new(
        id_column: impl Into<String>,
        target_column: impl Into<String>,
        attributes: Vec<String>,
    ) -> Self {
        Self {
            id_column: id_column.into(),
            target_column: target_column.into(),
            attributes,
        }
    }

    pub fn id_column(&self) -> &str {
        &self.id_column
    }

    pub fn target_column(&self) -> &str {
        &self.target_column
    }

    /// Non-target attributes, in source column order.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a == name)
    }
}
