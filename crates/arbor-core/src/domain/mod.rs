//! Domain model (examples, active sets, grouping and entropy tables, ...).

pub mod active_set;
pub mod chosen;
pub mod entropy;
pub mod errors;
pub mod example;
pub mod grouping;
pub mod ids;

pub use self::active_set::ActiveSet;
pub use self::chosen::ChosenAttributes;
pub use self::entropy::{AttributeEntropy, EntropyTable};
pub use self::errors::InductionError;
pub use self::example::{Example, ExampleId, Label, Schema};
pub use self::grouping::{AttributeGroups, GroupingTable, LabelBuckets};
pub use self::ids::RunId;
