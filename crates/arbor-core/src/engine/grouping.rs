//! GroupingEngine - partitions an ActiveSet by (value, label) per attribute.

use crate::domain::{ActiveSet, AttributeGroups, GroupingTable, InductionError};
use crate::ports::DatasetStore;

pub struct GroupingEngine<'s, S: ?Sized> {
    store: &'s S,
}

impl<'s, S: DatasetStore + ?Sized> GroupingEngine<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Build the GroupingTable of `active`.
    ///
    /// Every id of `active` lands in exactly one (value, label) bucket per
    /// attribute. Buckets are only created for ids that fill them.
    pub fn group(&self, active: &ActiveSet) -> Result<GroupingTable, InductionError> {
        if active.is_empty() {
            return Err(InductionError::EmptyActiveSet);
        }
        let examples = self.store.query_active_examples(active)?;

        let attributes = self
            .store
            .schema()
            .attributes()
            .iter()
            .map(|attribute| -> Result<AttributeGroups, InductionError> {
                let mut groups = AttributeGroups::new(attribute.as_str());
                for example in &examples {
                    let value = example.value(attribute).ok_or_else(|| {
                        InductionError::MissingValue {
                            id: example.id(),
                            attribute: attribute.clone(),
                        }
                    })?;
                    groups.insert(value, example.label(), example.id());
                }
                Ok(groups)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GroupingTable::new(active.clone(), attributes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ExampleId, Label};
    use crate::testing;
    use rstest::rstest;
    use std::collections::BTreeSet;

    fn set(ids: &[u32]) -> ActiveSet {
        ids.iter().copied().map(ExampleId::new).collect()
    }

    #[test]
    fn mixed_red_pure_blue_buckets() {
        let store = testing::mixed_red_pure_blue();
        let table = GroupingEngine::new(&store).group(&set(&[1, 2, 3, 4])).unwrap();
        let color = table.get("color").unwrap();

        let red = color.buckets("red").unwrap();
        assert_eq!(red.len(), 2);
        assert_eq!(red[&Label::new("T")], BTreeSet::from([ExampleId::new(1)]));
        assert_eq!(red[&Label::new("F")], BTreeSet::from([ExampleId::new(2)]));

        let blue = color.buckets("blue").unwrap();
        assert_eq!(blue.len(), 1, "no empty F bucket for blue");
    }

    #[rstest]
    #[case::full(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11])]
    #[case::pat_full(&[1, 3, 4, 8, 9, 11])]
    #[case::single(&[7])]
    #[case::scattered(&[0, 2, 5, 10])]
    fn partition_is_total_and_disjoint(#[case] ids: &[u32]) {
        let store = testing::waittable();
        let active = set(ids);
        let table = GroupingEngine::new(&store).group(&active).unwrap();

        assert_eq!(table.len(), 10);
        for groups in table.iter() {
            let mut seen = BTreeSet::new();
            for buckets in groups.values().values() {
                for members in buckets.values() {
                    assert!(!members.is_empty());
                    for id in members {
                        assert!(seen.insert(*id), "{id} appears twice under {}", groups.attribute());
                    }
                }
            }
            let seen: ActiveSet = seen.into_iter().collect();
            assert_eq!(seen, active, "attribute {}", groups.attribute());
        }
    }

    #[test]
    fn attributes_follow_schema_order() {
        let store = testing::waittable();
        let table = GroupingEngine::new(&store).group(&set(&[0, 1])).unwrap();
        let names: Vec<&str> = table.iter().map(|g| g.attribute()).collect();
        assert_eq!(
            names,
            vec!["alt", "bar", "fri", "hun", "pat", "price", "rain", "res", "type", "est"]
        );
    }

    #[test]
    fn empty_active_set_is_an_error() {
        let store = testing::mixed_red_pure_blue();
        let err = GroupingEngine::new(&store).group(&ActiveSet::new()).unwrap_err();
        assert_eq!(err, InductionError::EmptyActiveSet);
    }

    #[test]
    fn unknown_identifier_is_an_error() {
        let store = testing::mixed_red_pure_blue();
        let err = GroupingEngine::new(&store).group(&set(&[1, 42])).unwrap_err();
        assert_eq!(err, InductionError::UnknownIdentifier(ExampleId::new(42)));
    }
}
