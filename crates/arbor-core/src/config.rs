//! Induction configuration, loaded from TOML.
//!
//! ```toml
//! exclusion = "global"        # or "per-branch"
//! weighting = "unweighted"    # or "weighted"
//! on_exhaustion = "leaf"      # or "error"
//!
//! [dataset]
//! id_column = "num"
//! target_column = "wait"
//! delimiter = ","
//! ```
//!
//! Every key is optional; missing keys take the defaults shown above.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Scope of the "already chosen" exclusion set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExclusionScope {
    /// One set shared by every branch of the run. An attribute used in one
    /// branch is never offered to a sibling branch.
    #[default]
    Global,
    /// Each branch excludes only the attributes on its own root-to-leaf path.
    PerBranch,
}

/// How per-value entropies are combined into an attribute entropy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntropyWeighting {
    /// Plain sum over values.
    #[default]
    Unweighted,
    /// Each value's entropy scaled by its share of the active set.
    Weighted,
}

/// What happens when an impure branch has no attribute left to split on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExhaustionPolicy {
    /// The branch ends as a (mixed) leaf.
    #[default]
    Leaf,
    /// The run fails with `InductionError::AttributeExhaustion`.
    Error,
}

/// Layout of the delimited input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub id_column: String,
    pub target_column: String,
    pub delimiter: char,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            id_column: "num".to_string(),
            target_column: "wait".to_string(),
            delimiter: ',',
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InductionConfig {
    pub exclusion: ExclusionScope,
    pub weighting: EntropyWeighting,
    pub on_exhaustion: ExhaustionPolicy,
    pub dataset: DatasetConfig,
}

/// ConfigError is raised while reading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("delimiter {0:?} is not an ASCII character")]
    InvalidDelimiter(char),
}

impl InductionConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text).map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "loaded induction config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dataset.delimiter_byte()?;
        Ok(())
    }
}

impl DatasetConfig {
    pub fn delimiter_byte(&self) -> Result<u8, ConfigError> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(ConfigError::InvalidDelimiter(self.delimiter))
        }
    }
}
