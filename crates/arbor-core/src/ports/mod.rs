//! Ports - the traits between the engines and the outside world
//!
//! The engines only see these traits. Where the examples live (a database
//! table, a CSV file, a fixture) is an implementation detail of `impls`.

pub mod clock;
pub mod dataset_store;
pub mod example_source;
pub mod id_generator;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::dataset_store::DatasetStore;
pub use self::example_source::{ExampleSource, LoadError, LoadedDataset};
pub use self::id_generator::{IdGenerator, UlidGenerator};
