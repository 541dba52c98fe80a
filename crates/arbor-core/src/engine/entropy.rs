//! Entropy over a GroupingTable (log base 10).
//!
//! For one value `v` with `n_v` examples and `c` of them under label `l`,
//! the contribution is `Σ_l -(c/n_v) * log10(c/n_v)`. By default the
//! attribute entropy is the plain sum of those contributions over values.

use crate::config::EntropyWeighting;
use crate::domain::{AttributeGroups, EntropyTable, GroupingTable, InductionError, LabelBuckets};

/// Entropy of one value bucket. A single-label bucket is exactly 0.
pub fn value_entropy(buckets: &LabelBuckets) -> f64 {
    if AttributeGroups::is_pure(buckets) {
        return 0.0;
    }
    let total: usize = buckets.values().map(|ids| ids.len()).sum();
    let total = total as f64;
    buckets
        .values()
        .map(|ids| ids.len() as f64 / total)
        .filter(|p| *p > 0.0)
        .map(|p| -p * p.log10())
        .sum()
}

/// Entropy of one attribute over an active set of `active_len` examples.
pub fn attribute_entropy(
    groups: &AttributeGroups,
    active_len: usize,
    weighting: EntropyWeighting,
) -> f64 {
    groups
        .values()
        .values()
        .map(|buckets| {
            let h = value_entropy(buckets);
            match weighting {
                EntropyWeighting::Unweighted => h,
                EntropyWeighting::Weighted => {
                    let n_v: usize = buckets.values().map(|ids| ids.len()).sum();
                    h * n_v as f64 / active_len as f64
                }
            }
        })
        .sum()
}

/// EntropyTable for every attribute of `table`, in table order.
pub fn entropy(
    table: &GroupingTable,
    weighting: EntropyWeighting,
) -> Result<EntropyTable, InductionError> {
    let active_len = table.active().len();
    if active_len == 0 {
        return Err(InductionError::EmptyActiveSet);
    }
    let mut entropies = EntropyTable::new();
    for groups in table.iter() {
        entropies.push(
            groups.attribute(),
            attribute_entropy(groups, active_len, weighting),
        );
    }
    Ok(entropies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ActiveSet, ExampleId, Label};
    use crate::engine::GroupingEngine;
    use crate::testing;
    use rstest::rstest;

    const EPS: f64 = 1e-12;

    fn h2(a: f64, b: f64) -> f64 {
        let n = a + b;
        -(a / n) * (a / n).log10() - (b / n) * (b / n).log10()
    }

    fn table_of(store: &crate::impls::InMemoryDatasetStore, ids: &[u32]) -> GroupingTable {
        let active: ActiveSet = ids.iter().copied().map(ExampleId::new).collect();
        GroupingEngine::new(store).group(&active).unwrap()
    }

    #[test]
    fn single_label_bucket_is_exactly_zero() {
        let t = Label::new("T");
        let mut groups = AttributeGroups::new("color");
        for id in 1..=3 {
            groups.insert("red", &t, ExampleId::new(id));
        }
        let red = groups.buckets("red").unwrap();
        assert_eq!(value_entropy(red), 0.0);
        assert_eq!(attribute_entropy(&groups, 3, EntropyWeighting::Unweighted), 0.0);
    }

    #[test]
    fn mixed_red_color_is_log10_of_two() {
        let store = testing::mixed_red_pure_blue();
        let table = table_of(&store, &[1, 2, 3, 4]);
        let entropies = entropy(&table, EntropyWeighting::Unweighted).unwrap();
        let color = entropies.get("color").unwrap();
        assert!(color > 0.0);
        assert!((color - 2f64.log10()).abs() < EPS);
    }

    #[test]
    fn separating_shape_has_zero_entropy() {
        let store = testing::separating_shape();
        let table = table_of(&store, &[1, 2, 3, 4]);
        let entropies = entropy(&table, EntropyWeighting::Unweighted).unwrap();
        assert_eq!(entropies.get("shape"), Some(0.0));
        assert!(entropies.get("noise").unwrap() > 0.0);
    }

    #[rstest]
    #[case::pat("pat", h2(2.0, 4.0))]
    #[case::hun("hun", h2(5.0, 2.0) + h2(1.0, 4.0))]
    #[case::type_("type", 4.0 * 2f64.log10())]
    #[case::price("price", h2(1.0, 2.0) + h2(3.0, 4.0))]
    fn waittable_root_entropies(#[case] attribute: &str, #[case] expected: f64) {
        let store = testing::waittable();
        let table = table_of(&store, &(0..12).collect::<Vec<_>>());
        let entropies = entropy(&table, EntropyWeighting::Unweighted).unwrap();
        let got = entropies.get(attribute).unwrap();
        assert!((got - expected).abs() < EPS, "{attribute}: {got} vs {expected}");
    }

    #[test]
    fn weighted_scales_by_value_share() {
        let store = testing::waittable();
        let table = table_of(&store, &(0..12).collect::<Vec<_>>());
        let weighted = entropy(&table, EntropyWeighting::Weighted).unwrap();
        // Only the Full bucket (6 of 12) of pat is mixed.
        let pat = weighted.get("pat").unwrap();
        assert!((pat - 0.5 * h2(2.0, 4.0)).abs() < EPS);
    }

    #[rstest]
    #[case::full(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11])]
    #[case::pat_full(&[1, 3, 4, 8, 9, 11])]
    #[case::pure(&[0, 2, 5, 7])]
    fn entropy_is_non_negative_and_zero_iff_pure(#[case] ids: &[u32]) {
        let store = testing::waittable();
        let table = table_of(&store, ids);
        for weighting in [EntropyWeighting::Unweighted, EntropyWeighting::Weighted] {
            let entropies = entropy(&table, weighting).unwrap();
            for e in entropies.iter() {
                let groups = table.get(&e.attribute).unwrap();
                let all_pure = groups.values().values().all(AttributeGroups::is_pure);
                assert!(e.entropy >= 0.0);
                assert_eq!(e.entropy == 0.0, all_pure, "{}", e.attribute);
            }
        }
    }

    #[test]
    fn empty_table_is_an_error() {
        let table = GroupingTable::new(ActiveSet::new(), Vec::new());
        let err = entropy(&table, EntropyWeighting::Unweighted).unwrap_err();
        assert_eq!(err, InductionError::EmptyActiveSet);
    }
}
