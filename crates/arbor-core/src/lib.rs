//! arbor-core
//!
//! ID3-style split-order induction over small categorical datasets.
//!
//! # Modules
//! - **domain**: Example, ActiveSet, GroupingTable, EntropyTable, ChosenAttributes, errors
//! - **ports**: DatasetStore, ExampleSource, Clock, IdGenerator
//! - **engine**: grouping / entropy / induction
//! - **app**: InductionBuilder, Induction, RunReport
//! - **impls**: InMemoryDatasetStore, CsvSource
//! - **config**: InductionConfig, loaded from TOML

pub mod app;
pub mod config;
pub mod domain;
pub mod engine;
pub mod impls;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::{BuildError, Induction, InductionBuilder, RunReport};
pub use config::{ConfigError, EntropyWeighting, ExclusionScope, ExhaustionPolicy, InductionConfig};
pub use domain::{ActiveSet, ChosenAttributes, InductionError};
