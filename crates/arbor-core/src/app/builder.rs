//! InductionBuilder - wiring and fail-fast validation of an induction run

use crate::app::Induction;
use crate::config::{ConfigError, InductionConfig};
use crate::ports::{Clock, DatasetStore, SystemClock, UlidGenerator};
use std::sync::Arc;

/// InductionBuilder assembles an `Induction` around a DatasetStore.
///
/// # Example
/// ```ignore
/// let induction = InductionBuilder::new(store)
///     .config(config)
///     .build()?;
/// let report = induction.run()?;
/// ```
///
/// # Fail-fast
/// build() rejects a store that could never produce a split: no examples,
/// or no attributes besides the id and the target.
pub struct InductionBuilder<S> {
    store: S,
    config: InductionConfig,
    clock: Arc<dyn Clock>,
}

/// BuildError はラン構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("dataset has no examples")]
    EmptyDataset,

    #[error("dataset has no attributes besides '{id_column}' and '{target_column}'")]
    NoAttributes {
        id_column: String,
        target_column: String,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl<S: DatasetStore> InductionBuilder<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: InductionConfig::default(),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn config(mut self, config: InductionConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the wall clock, e.g. with a FixedClock in tests.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn build(self) -> Result<Induction<S>, BuildError> {
        self.config.validate()?;
        if self.store.is_empty() {
            return Err(BuildError::EmptyDataset);
        }
        let schema = self.store.schema();
        if schema.attributes().is_empty() {
            return Err(BuildError::NoAttributes {
                id_column: schema.id_column().to_string(),
                target_column: schema.target_column().to_string(),
            });
        }
        let ids = UlidGenerator::new(self.clock.clone());
        Ok(Induction::new(self.store, self.config, self.clock, ids))
    }
}
