//! Shared fixtures for unit tests.

use crate::config::DatasetConfig;
use crate::domain::{Example, Schema};
use crate::impls::{CsvSource, InMemoryDatasetStore};

pub(crate) const WAITTABLE_CSV: &str = include_str!("../../../demos/waittable.csv");

fn store(attributes: &[&str], examples: Vec<Example>) -> InMemoryDatasetStore {
    let schema = Schema::new(
        "num",
        "wait",
        attributes.iter().map(|a| a.to_string()).collect(),
    );
    InMemoryDatasetStore::new(schema, examples).expect("fixture is well-formed")
}

/// One attribute `color`; the red bucket is mixed, the blue bucket is pure.
pub(crate) fn mixed_red_pure_blue() -> InMemoryDatasetStore {
    store(
        &["color"],
        vec![
            Example::from_pairs(1, &[("color", "red")], "T"),
            Example::from_pairs(2, &[("color", "red")], "F"),
            Example::from_pairs(3, &[("color", "blue")], "T"),
            Example::from_pairs(4, &[("color", "blue")], "T"),
        ],
    )
}

/// `noise` is mixed on both values, `shape` separates the labels exactly.
pub(crate) fn separating_shape() -> InMemoryDatasetStore {
    store(
        &["noise", "shape"],
        vec![
            Example::from_pairs(1, &[("noise", "a"), ("shape", "round")], "T"),
            Example::from_pairs(2, &[("noise", "b"), ("shape", "round")], "T"),
            Example::from_pairs(3, &[("noise", "a"), ("shape", "square")], "F"),
            Example::from_pairs(4, &[("noise", "b"), ("shape", "square")], "F"),
        ],
    )
}

/// label = a XOR b. Splitting on `a` leaves two mixed branches that `b`
/// resolves, so both branches want the same attribute.
pub(crate) fn xor() -> InMemoryDatasetStore {
    store(
        &["a", "b"],
        vec![
            Example::from_pairs(1, &[("a", "x"), ("b", "p")], "T"),
            Example::from_pairs(2, &[("a", "x"), ("b", "q")], "F"),
            Example::from_pairs(3, &[("a", "y"), ("b", "p")], "F"),
            Example::from_pairs(4, &[("a", "y"), ("b", "q")], "T"),
        ],
    )
}

/// The 12-example restaurant dataset in `demos/waittable.csv`.
pub(crate) fn waittable() -> InMemoryDatasetStore {
    InMemoryDatasetStore::load(&CsvSource::from_text(
        WAITTABLE_CSV,
        DatasetConfig::default(),
    ))
    .expect("waittable.csv is well-formed")
}
