//! Engine - grouping, entropy and split-order induction.
//!
//! Control flows induction → grouping → (narrow) → induction until every
//! branch is pure or out of attributes.

pub mod entropy;
pub mod grouping;
pub mod induction;

pub use self::entropy::{attribute_entropy, entropy, value_entropy};
pub use self::grouping::GroupingEngine;
pub use self::induction::{Induced, InductionEngine, InductionOptions, SplitRecord};
