//! InductionEngine - picks split attributes and follows impure branches
//!
//! # Branch states
//! - Active: the branch still mixes labels
//! - Splitting: an attribute is chosen, child active sets are computed
//! - Leaf: every bucket under the chosen attribute is pure, or no attribute
//!   is left to choose
//!
//! Branches are walked depth-first with an explicit work-list instead of
//! native recursion. Children are pushed in reverse value order, so the
//! visiting order is the same pre-order a recursive walk would produce.
//! That order matters under `ExclusionScope::Global`, where a branch only
//! sees the attributes its earlier siblings have not consumed.

use crate::config::{EntropyWeighting, ExclusionScope, ExhaustionPolicy, InductionConfig};
use crate::domain::{
    ActiveSet, AttributeEntropy, AttributeGroups, ChosenAttributes, EntropyTable, GroupingTable,
    InductionError,
};
use crate::engine::{GroupingEngine, entropy};
use crate::ports::DatasetStore;
use serde::Serialize;

/// Knobs of the induction algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InductionOptions {
    pub exclusion: ExclusionScope,
    pub weighting: EntropyWeighting,
    pub on_exhaustion: ExhaustionPolicy,
}

impl From<&InductionConfig> for InductionOptions {
    fn from(config: &InductionConfig) -> Self {
        Self {
            exclusion: config.exclusion,
            weighting: config.weighting,
            on_exhaustion: config.on_exhaustion,
        }
    }
}

/// One split, as it happened.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitRecord {
    pub depth: usize,
    pub attribute: String,
    pub entropy: f64,
    pub active: ActiveSet,
    /// Impure values of `attribute` and the child active set each one opened.
    pub branches: Vec<(String, ActiveSet)>,
}

/// Result of a run: the split order plus the splits that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Induced {
    pub chosen: ChosenAttributes,
    pub splits: Vec<SplitRecord>,
}

/// Pending branch on the work-list.
struct Frame {
    active: ActiveSet,
    /// Attributes chosen on the way from the root to this branch.
    path: Vec<String>,
    depth: usize,
}

pub struct InductionEngine<'s, S: ?Sized> {
    grouping: GroupingEngine<'s, S>,
    options: InductionOptions,
}

impl<'s, S: DatasetStore + ?Sized> InductionEngine<'s, S> {
    pub fn new(store: &'s S, options: InductionOptions) -> Self {
        Self {
            grouping: GroupingEngine::new(store),
            options,
        }
    }

    pub fn group(&self, active: &ActiveSet) -> Result<GroupingTable, InductionError> {
        self.grouping.group(active)
    }

    pub fn entropy(&self, table: &GroupingTable) -> Result<EntropyTable, InductionError> {
        entropy(table, self.options.weighting)
    }

    /// Lowest-entropy attribute not in `excluded`; first in schema order on a tie.
    pub fn select<'t>(
        &self,
        entropies: &'t EntropyTable,
        excluded: &[String],
    ) -> Option<&'t AttributeEntropy> {
        entropies.min_excluding(|a| excluded.iter().any(|e| e == a))
    }

    /// Extend `chosen` with the split order induced from `active`.
    pub fn induce(
        &self,
        active: ActiveSet,
        chosen: ChosenAttributes,
    ) -> Result<ChosenAttributes, InductionError> {
        self.induce_traced(active, chosen).map(|induced| induced.chosen)
    }

    /// Like `induce`, also returning every split in visiting order.
    pub fn induce_traced(
        &self,
        active: ActiveSet,
        chosen: ChosenAttributes,
    ) -> Result<Induced, InductionError> {
        if active.is_empty() {
            return Err(InductionError::EmptyActiveSet);
        }
        let mut chosen = chosen;
        let mut splits = Vec::new();
        let mut stack = vec![Frame {
            active,
            path: chosen.as_slice().to_vec(),
            depth: 0,
        }];

        while let Some(frame) = stack.pop() {
            let table = self.group(&frame.active)?;
            let entropies = self.entropy(&table)?;

            let pick = match self.options.exclusion {
                ExclusionScope::Global => self.select(&entropies, chosen.as_slice()),
                ExclusionScope::PerBranch => self.select(&entropies, &frame.path),
            };
            let Some(pick) = pick else {
                self.exhausted(&frame, &table)?;
                continue;
            };
            let groups = groups_for(&table, pick)?;

            chosen.push(pick.attribute.clone());
            let branches = child_branches(&frame.active, groups);
            tracing::debug!(
                depth = frame.depth,
                attribute = %pick.attribute,
                entropy = pick.entropy,
                active = frame.active.len(),
                impure = branches.len(),
                "split"
            );
            if branches.is_empty() {
                tracing::trace!(depth = frame.depth, attribute = %pick.attribute, "all buckets pure");
            }

            let mut path = frame.path;
            path.push(pick.attribute.clone());
            for (_, child) in branches.iter().rev() {
                stack.push(Frame {
                    active: child.clone(),
                    path: path.clone(),
                    depth: frame.depth + 1,
                });
            }
            splits.push(SplitRecord {
                depth: frame.depth,
                attribute: pick.attribute.clone(),
                entropy: pick.entropy,
                active: frame.active,
                branches,
            });
        }

        Ok(Induced { chosen, splits })
    }

    /// Nothing left to choose for `frame`.
    fn exhausted(&self, frame: &Frame, table: &GroupingTable) -> Result<(), InductionError> {
        if table.is_pure() {
            tracing::trace!(depth = frame.depth, active = frame.active.len(), "pure leaf");
            return Ok(());
        }
        match self.options.on_exhaustion {
            ExhaustionPolicy::Leaf => {
                tracing::debug!(
                    depth = frame.depth,
                    active = frame.active.len(),
                    "no attribute left, branch ends mixed"
                );
                Ok(())
            }
            ExhaustionPolicy::Error => Err(InductionError::AttributeExhaustion {
                active_len: frame.active.len(),
            }),
        }
    }
}

fn groups_for<'t>(
    table: &'t GroupingTable,
    pick: &AttributeEntropy,
) -> Result<&'t AttributeGroups, InductionError> {
    table
        .get(&pick.attribute)
        .ok_or_else(|| InductionError::UnknownAttribute(pick.attribute.clone()))
}

/// Child active sets for the impure values of `groups`, in value order.
fn child_branches(active: &ActiveSet, groups: &AttributeGroups) -> Vec<(String, ActiveSet)> {
    groups
        .impure_values()
        .map(|(value, buckets)| {
            let members = AttributeGroups::members(buckets);
            (value.to_string(), active.restrict_to(&members))
        })
        .collect()
}
