//! ExampleSource port - bulk loading of a dataset
//!
//! # Implementations
//! - **CsvSource**: delimited text with a header row

use crate::domain::{Example, ExampleId, Schema};
use std::path::PathBuf;

/// Everything a source yields: the schema and the examples, in file order.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub schema: Schema,
    pub examples: Vec<Example>,
}

/// ExampleSource は外部データから例題を読み込む
pub trait ExampleSource {
    fn load_examples(&self) -> Result<LoadedDataset, LoadError>;
}

/// LoadError is raised while reading or validating a dataset.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed delimited input: {0}")]
    Csv(#[from] csv::Error),

    #[error("delimiter {0:?} is not an ASCII character")]
    InvalidDelimiter(char),

    #[error("column '{0}' not found in header")]
    MissingColumn(String),

    #[error("record {record}: id '{value}' is not a non-negative integer")]
    InvalidId { record: u64, value: String },

    #[error("duplicate example id {0}")]
    DuplicateId(ExampleId),

    #[error("target is not binary, found labels {0:?}")]
    NonBinaryTarget(Vec<String>),

    #[error("example id {id} has no value for attribute '{attribute}'")]
    MissingValue { id: ExampleId, attribute: String },
}
