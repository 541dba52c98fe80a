//! Errors - failures of the grouping and induction engines
//!
//! Every variant is fatal for the run: the engine never retries and never
//! skips a branch. Callers may report the error but must not resume the run.

use super::example::ExampleId;

/// InductionError is raised by grouping, entropy and induction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InductionError {
    /// Grouping or entropy was requested over zero examples.
    #[error("active set is empty")]
    EmptyActiveSet,

    /// No unchosen attribute is left but the active set still mixes labels.
    #[error("no unchosen attribute remains for an impure active set of {active_len} examples")]
    AttributeExhaustion { active_len: usize },

    /// The active set references an id the store does not hold.
    #[error("example id {0} is not in the dataset store")]
    UnknownIdentifier(ExampleId),

    /// An example has no value for one of the schema attributes.
    #[error("example id {id} has no value for attribute '{attribute}'")]
    MissingValue { id: ExampleId, attribute: String },

    /// A selected attribute has no groups in the table it was selected from.
    #[error("attribute '{0}' is not in the grouping table")]
    UnknownAttribute(String),
}
