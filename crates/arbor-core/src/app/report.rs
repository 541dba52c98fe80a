//! Induction - one configured run over a DatasetStore, and its report.

use crate::config::InductionConfig;
use crate::domain::{ChosenAttributes, EntropyTable, GroupingTable, InductionError, RunId};
use crate::engine::{InductionEngine, InductionOptions, SplitRecord};
use crate::ports::{Clock, DatasetStore, IdGenerator, UlidGenerator};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Everything a run produced.
///
/// `chosen` is the primary artifact; the initial tables and the split log
/// are there for display and debugging.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: RunId,
    pub started_at: DateTime<Utc>,
    pub config: InductionConfig,
    pub initial_grouping: GroupingTable,
    pub initial_entropy: EntropyTable,
    pub chosen: ChosenAttributes,
    pub splits: Vec<SplitRecord>,
}

impl RunReport {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Induction はビルド済みのラン
pub struct Induction<S> {
    store: S,
    config: InductionConfig,
    clock: Arc<dyn Clock>,
    ids: UlidGenerator<Arc<dyn Clock>>,
}

impl<S: DatasetStore> Induction<S> {
    pub(crate) fn new(
        store: S,
        config: InductionConfig,
        clock: Arc<dyn Clock>,
        ids: UlidGenerator<Arc<dyn Clock>>,
    ) -> Self {
        Self {
            store,
            config,
            clock,
            ids,
        }
    }

    fn engine(&self) -> InductionEngine<'_, S> {
        InductionEngine::new(&self.store, InductionOptions::from(&self.config))
    }

    /// Grouping and entropy tables of the full dataset, without inducing.
    pub fn inspect(&self) -> Result<(GroupingTable, EntropyTable), InductionError> {
        let engine = self.engine();
        let grouping = engine.group(&self.store.all_ids())?;
        let entropy = engine.entropy(&grouping)?;
        Ok((grouping, entropy))
    }

    /// Induce the split order over the whole dataset.
    pub fn run(&self) -> Result<RunReport, InductionError> {
        let run_id = self.ids.generate_run_id();
        let started_at = self.clock.now();
        let span = tracing::info_span!("induction", run_id = %run_id);
        let _guard = span.enter();

        tracing::info!(
            examples = self.store.len(),
            attributes = self.store.schema().attributes().len(),
            exclusion = ?self.config.exclusion,
            weighting = ?self.config.weighting,
            "induction started"
        );
        let (initial_grouping, initial_entropy) = self.inspect()?;
        let induced = self
            .engine()
            .induce_traced(self.store.all_ids(), ChosenAttributes::new())
            .inspect_err(|e| tracing::error!(error = %e, "induction aborted"))?;
        tracing::info!(
            chosen = %induced.chosen,
            splits = induced.splits.len(),
            "induction finished"
        );

        Ok(RunReport {
            run_id,
            started_at,
            config: self.config.clone(),
            initial_grouping,
            initial_entropy,
            chosen: induced.chosen,
            splits: induced.splits,
        })
    }
}
