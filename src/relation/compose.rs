//! Composition of two sequential replacement relations.

use super::diagnostics::Diagnostic;
use super::map::ReplacementMap;
use super::store::empty_set;
use super::Entity;
use crate::error::Result;

impl<E: Entity> ReplacementMap<E> {
    /// Fold `next` into this relation so that it describes this edit
    /// followed by `next`.
    ///
    /// `next` is read only. An entity that `next` replaces but this relation
    /// never produced is taken to have survived the first edit unchanged, so
    /// it is recorded as replacing itself.
    pub fn append(&mut self, next: &ReplacementMap<E>) -> Result<()> {
        self.ensure_mutable("append")?;

        for (b, cs) in next.store.forward.iter() {
            let sources = match self.store.take_sources(b) {
                Some(sources) => sources,
                None => {
                    let mut itself = empty_set();
                    itself.insert(b.clone());
                    itself
                }
            };

            for a in &sources {
                // b is intermediate now and must not stay a final target
                let targets = self.store.ensure_target(a);
                targets.remove(b);
                targets.extend(cs.iter().cloned());
            }

            for c in cs {
                self.store.ensure_source(c).extend(sources.iter().cloned());
            }
        }

        for (c, bs) in next.store.inverse.iter() {
            if self.store.has_sources_entry(c) {
                continue;
            }
            if !bs.is_empty() {
                self.sink.report(&Diagnostic::UnrepresentedReplacement {
                    entity: self.describe(c),
                    sources: bs.len(),
                });
            }
            self.store.ensure_source(c);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;

    use super::*;
    use crate::circuit::ComponentId;
    use crate::relation::store::EntitySet;
    use crate::relation::{validate_relation, RecordingSink};

    fn c(n: usize) -> ComponentId {
        ComponentId(n)
    }

    fn set(ids: &[usize]) -> EntitySet<ComponentId> {
        ids.iter().map(|&n| c(n)).collect()
    }

    #[test]
    fn test_chain_composes() {
        let mut first = ReplacementMap::with_replacement(c(1), c(2));
        let second = ReplacementMap::with_replacement(c(2), c(3));
        first.append(&second).unwrap();

        assert_eq!(first.get(&c(1)), Some(&set(&[3])));
        assert!(!first.get(&c(1)).unwrap().contains(&c(2)));
        assert_eq!(first.sources_of(&c(3)), Some(&set(&[1])));
        assert_eq!(first.sources_of(&c(2)), None);
        validate_relation(&first).unwrap();
    }

    #[test]
    fn test_untouched_intermediate_replaces_itself() {
        let mut first = ReplacementMap::with_replacement(c(1), c(9));
        let second = ReplacementMap::with_replacement(c(2), c(3));
        first.append(&second).unwrap();

        assert_eq!(first.get(&c(2)), Some(&set(&[3])));
        assert_eq!(first.sources_of(&c(3)), Some(&set(&[2])));
        assert_eq!(first.get(&c(1)), Some(&set(&[9])));
        validate_relation(&first).unwrap();
    }

    #[test]
    fn test_compose_onto_empty() {
        let mut first = ReplacementMap::new();
        let second = ReplacementMap::with_replacement(c(2), c(3));
        first.append(&second).unwrap();

        assert_eq!(first.get(&c(1)), None);
        assert_eq!(first.get(&c(2)), Some(&set(&[3])));
        assert_eq!(first.sources_of(&c(3)), Some(&set(&[2])));
    }

    #[test]
    fn test_second_step_removal() {
        let mut first = ReplacementMap::with_replacement(c(1), c(2));
        let mut second = ReplacementMap::new();
        second.remove(c(2)).unwrap();
        first.append(&second).unwrap();

        assert_eq!(first.get(&c(1)), Some(&set(&[])));
        assert_eq!(first.sources_of(&c(2)), None);
        validate_relation(&first).unwrap();
    }

    #[test]
    fn test_split_then_merge() {
        let mut first = ReplacementMap::new();
        first.put(&c(1), &[c(2), c(3)]).unwrap();
        let mut second = ReplacementMap::new();
        second.replace(c(2), c(4)).unwrap();
        second.replace(c(3), c(4)).unwrap();
        first.append(&second).unwrap();

        assert_eq!(first.get(&c(1)), Some(&set(&[4])));
        assert_eq!(first.sources_of(&c(4)), Some(&set(&[1])));
        validate_relation(&first).unwrap();
    }

    #[test]
    fn test_additions_carry_over() {
        let mut first = ReplacementMap::new();
        first.add(c(1)).unwrap();
        let mut second = ReplacementMap::new();
        second.add(c(2)).unwrap();
        first.append(&second).unwrap();

        let mut additions: Vec<_> = first.additions().copied().collect();
        additions.sort();
        assert_eq!(additions, vec![c(1), c(2)]);
        assert!(first.get(&c(2)).is_none());
    }

    #[test]
    fn test_added_then_replaced() {
        let mut first = ReplacementMap::new();
        first.add(c(1)).unwrap();
        let second = ReplacementMap::with_replacement(c(1), c(2));
        first.append(&second).unwrap();

        // c1 came from nothing, so c2 comes from nothing too
        assert_eq!(first.sources_of(&c(2)), Some(&set(&[])));
        assert_eq!(first.sources_of(&c(1)), None);
        assert!(first.get(&c(1)).is_none());
        validate_relation(&first).unwrap();
    }

    #[test]
    fn test_next_is_left_intact() {
        let mut first = ReplacementMap::with_replacement(c(1), c(2));
        let mut second = ReplacementMap::with_replacement(c(2), c(3));
        second.freeze();
        let before = second.clone();
        first.append(&second).unwrap();
        assert_eq!(second, before);
    }

    #[test]
    fn test_frozen_target_rejects_append() {
        let mut first = ReplacementMap::with_replacement(c(1), c(2));
        first.freeze();
        let second = ReplacementMap::with_replacement(c(2), c(3));
        assert!(first.append(&second).unwrap_err().is_immutable());
        assert_eq!(first.get(&c(1)), Some(&set(&[2])));
    }

    #[test]
    fn test_unrepresented_product_is_reported_and_dropped() {
        let sink = Arc::new(RecordingSink::new());
        let mut first = ReplacementMap::with_sink(sink.clone());
        first.replace(c(1), c(2)).unwrap();

        // An inconsistent step: c5 claims c4 as a source but c4 has no
        // forward entry.
        let mut second: ReplacementMap<ComponentId> = ReplacementMap::new();
        second.store.ensure_source(&c(5)).insert(c(4));
        first.append(&second).unwrap();

        assert_eq!(sink.len(), 1);
        assert_eq!(first.sources_of(&c(5)), Some(&set(&[])));
        assert_eq!(first.get(&c(4)), None);
        validate_relation(&first).unwrap();
    }

    #[test]
    fn test_unrepresented_product_uses_label() {
        let sink = Arc::new(RecordingSink::new());
        let mut first = ReplacementMap::with_sink(sink.clone());
        first.set_label(Arc::new(|id: &ComponentId| format!("pin{}", id.0)));

        let mut second: ReplacementMap<ComponentId> = ReplacementMap::new();
        second.store.ensure_source(&c(5)).insert(c(4));
        first.append(&second).unwrap();

        assert_eq!(
            sink.diagnostics(),
            vec![Diagnostic::UnrepresentedReplacement {
                entity: "pin5".to_string(),
                sources: 1,
            }]
        );
    }

    #[test]
    fn test_consistent_composition_reports_nothing() {
        let sink = Arc::new(RecordingSink::new());
        let mut first = ReplacementMap::with_sink(sink.clone());
        first.replace(c(1), c(2)).unwrap();
        let mut second = ReplacementMap::new();
        second.put(&c(2), &[c(3), c(4)]).unwrap();
        second.add(c(7)).unwrap();
        first.append(&second).unwrap();
        assert!(sink.is_empty());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(usize),
        Put(usize, Vec<usize>),
        Remove(usize),
        Replace(usize, usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..12usize).prop_map(Op::Add),
            (0..12usize, proptest::collection::vec(0..12usize, 0..4))
                .prop_map(|(a, bs)| Op::Put(a, bs)),
            (0..12usize).prop_map(Op::Remove),
            (0..12usize, 0..12usize).prop_map(|(a, b)| Op::Replace(a, b)),
        ]
    }

    fn build(ops: &[Op]) -> ReplacementMap<ComponentId> {
        let mut map = ReplacementMap::with_sink(Arc::new(RecordingSink::new()));
        for op in ops {
            let applied = match op {
                Op::Add(a) => map.add(c(*a)),
                Op::Put(a, bs) => {
                    let news: Vec<_> = bs.iter().map(|&b| c(b)).collect();
                    map.put(&c(*a), &news)
                }
                Op::Remove(a) => map.remove(c(*a)),
                Op::Replace(a, b) => map.replace(c(*a), c(*b)),
            };
            applied.unwrap();
        }
        map
    }

    proptest! {
        #[test]
        fn invariant_survives_mutation_and_append(
            first in proptest::collection::vec(op_strategy(), 0..24),
            second in proptest::collection::vec(op_strategy(), 0..24),
        ) {
            let mut map = build(&first);
            prop_assert!(validate_relation(&map).is_ok());
            let next = build(&second);
            map.append(&next).unwrap();
            prop_assert!(validate_relation(&map).is_ok());
        }

        #[test]
        fn inverse_is_an_involution(ops in proptest::collection::vec(op_strategy(), 0..24)) {
            let map = build(&ops);
            prop_assert_eq!(map.inverse_map().inverse_map(), map);
        }
    }
}
