use super::*;

use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

/// Walks a tree asserting canonical form: no reachable node may be valueless
/// with two empty children.
fn assert_canonical<V>(root: &Tree<V>) {
    let mut stack: Vec<&Tree<V>> = vec![root];
    while let Some(t) = stack.pop() {
        if let Tree::Node { value, left, right } = t {
            assert!(
                value.is_some() || !left.is_empty() || !right.is_empty(),
                "valueless node with two empty children"
            );
            stack.push(left);
            stack.push(right);
        }
    }
}

#[derive(Clone, Debug)]
enum Op {
    Insert(Key, u64),
    Remove(Key),
    Get(Key),
    Alter(Key, u64),
}

/// The update function exercised by `Op::Alter`: inserts, updates, or deletes
/// depending on the current value and the delta, so a single op sequence hits
/// all three behaviors of the generalized update.
fn alter_fn(old: Option<&u64>, delta: u64) -> Option<u64> {
    match old {
        None if delta % 2 == 0 => Some(delta),
        None => None,
        Some(&v) => {
            if delta % 3 == 0 {
                None
            } else {
                Some(v.wrapping_add(delta))
            }
        }
    }
}

fn key_strategy() -> impl Strategy<Value = Key> + Clone {
    prop_oneof![
        // Small keys collide often, exercising update/delete/collapse paths.
        4 => (1u64..=4096).prop_map(|n| Key::try_from(n).unwrap()),
        // Wide keys exercise the iterative descent well past 64 bits.
        1 => prop::collection::vec(any::<u8>(), 1..=20)
            .prop_map(|bytes| Key::new(BigUint::from_bytes_be(&bytes) + 1u32).unwrap()),
    ]
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let key = key_strategy();
    let op = prop_oneof![
        45 => (key.clone(), any::<u64>()).prop_map(|(k, v)| Op::Insert(k, v)),
        20 => key.clone().prop_map(Op::Remove),
        20 => key.clone().prop_map(Op::Get),
        15 => (key, any::<u64>()).prop_map(|(k, d)| Op::Alter(k, d)),
    ];
    prop::collection::vec(op, 0..=300)
}

fn pairs_strategy() -> impl Strategy<Value = Vec<(Key, u64)>> {
    prop::collection::vec((key_strategy(), any::<u64>()), 0..=64)
}

fn model_of(pairs: &[(Key, u64)]) -> BTreeMap<BigUint, u64> {
    pairs
        .iter()
        .map(|(k, v)| (k.as_biguint().clone(), *v))
        .collect()
}

fn map_from_model(model: &BTreeMap<BigUint, u64>) -> TrieMap<u64> {
    model
        .iter()
        .map(|(k, v)| (Key::new(k.clone()).unwrap(), *v))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in ops_strategy()) {
        let mut t: TrieMap<u64> = TrieMap::new();
        let mut m: BTreeMap<BigUint, u64> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    t = t.insert(&k, v);
                    m.insert(k.into_biguint(), v);
                }
                Op::Remove(k) => {
                    t = t.remove(&k);
                    m.remove(k.as_biguint());
                }
                Op::Get(k) => {
                    prop_assert_eq!(t.get(&k), m.get(k.as_biguint()));
                }
                Op::Alter(k, delta) => {
                    t = t.alter(&k, |old| alter_fn(old, delta));
                    match alter_fn(m.get(k.as_biguint()), delta) {
                        Some(v) => m.insert(k.into_biguint(), v),
                        None => m.remove(k.as_biguint()),
                    };
                }
            }
        }

        assert_canonical(&t.root);
        prop_assert_eq!(t.len(), m.len());
        prop_assert_eq!(t.is_empty(), m.is_empty());
        let got: BTreeMap<BigUint, u64> =
            t.iter().map(|(k, v)| (k.into_biguint(), *v)).collect();
        prop_assert_eq!(got, m);
    }

    #[test]
    fn prop_extensionality(pairs in pairs_strategy()) {
        // Whatever order the same associations arrive in, the resulting trees
        // must be structurally identical.
        let model = model_of(&pairs);
        let in_given_order: TrieMap<u64> = pairs.into_iter().collect();
        let ascending = map_from_model(&model);
        let descending: TrieMap<u64> = model
            .iter()
            .rev()
            .map(|(k, v)| (Key::new(k.clone()).unwrap(), *v))
            .collect();

        assert_canonical(&in_given_order.root);
        prop_assert_eq!(&in_given_order, &ascending);
        prop_assert_eq!(&ascending, &descending);
    }

    #[test]
    fn prop_enumeration_round_trip(pairs in pairs_strategy()) {
        let m: TrieMap<u64> = pairs.into_iter().collect();

        let listed = m.to_vec();
        prop_assert_eq!(listed.len(), m.len());
        let distinct: BTreeSet<&Key> = listed.iter().map(|(k, _)| k).collect();
        prop_assert_eq!(distinct.len(), listed.len());

        let rebuilt: TrieMap<u64> = listed.into_iter().collect();
        prop_assert_eq!(rebuilt, m);
    }

    #[test]
    fn prop_alter_point_laws(pairs in pairs_strategy(), k in key_strategy(), v in any::<u64>()) {
        let m: TrieMap<u64> = pairs.into_iter().collect();

        let inserted = m.alter(&k, |_| Some(v));
        prop_assert_eq!(inserted.get(&k), Some(&v));

        let removed = m.alter(&k, |_| None);
        prop_assert_eq!(removed.get(&k), None);
        assert_canonical(&removed.root);

        // Every key other than the altered one reads the same as before.
        for (j, old) in m.iter() {
            if j != k {
                prop_assert_eq!(inserted.get(&j), Some(old));
                prop_assert_eq!(removed.get(&j), Some(old));
            }
        }
    }

    #[test]
    fn prop_merge_contract(pa in pairs_strategy(), pb in pairs_strategy()) {
        let ma = model_of(&pa);
        let mb = model_of(&pb);
        let a: TrieMap<u64> = map_from_model(&ma);
        let b: TrieMap<u64> = map_from_model(&mb);

        let f = |x: Option<&u64>, y: Option<&u64>| match (x, y) {
            (Some(x), Some(y)) => Some(x.wrapping_add(*y)),
            (Some(x), None) => Some(*x),
            (None, Some(y)) => Some(*y),
            (None, None) => None,
        };
        let merged = TrieMap::merge(f, &a, &b);
        assert_canonical(&merged.root);

        let keys: BTreeSet<&BigUint> = ma.keys().chain(mb.keys()).collect();
        prop_assert_eq!(merged.len(), keys.len());
        for n in keys {
            let k = Key::new(n.clone()).unwrap();
            prop_assert_eq!(merged.get(&k).copied(), f(ma.get(n), mb.get(n)));
        }
    }

    #[test]
    fn prop_map_and_filter_map(pairs in pairs_strategy()) {
        let model = model_of(&pairs);
        let m = map_from_model(&model);

        let mapped = m.map_values(|v| v ^ 0xFFFF);
        prop_assert_eq!(mapped.len(), m.len());
        for (k, v) in m.iter() {
            prop_assert_eq!(mapped.get(&k), Some(&(v ^ 0xFFFF)));
        }

        let keep_odd = |v: &u64| if v % 2 == 1 { Some(v / 2) } else { None };
        let filtered = m.filter_map_values(keep_odd);
        assert_canonical(&filtered.root);
        let expected: TrieMap<u64> = model
            .iter()
            .filter_map(|(k, v)| keep_odd(v).map(|w| (Key::new(k.clone()).unwrap(), w)))
            .collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn prop_set_algebra(
        ka in prop::collection::vec(key_strategy(), 0..=48),
        kb in prop::collection::vec(key_strategy(), 0..=48),
    ) {
        let sa: BTreeSet<BigUint> = ka.iter().map(|k| k.as_biguint().clone()).collect();
        let sb: BTreeSet<BigUint> = kb.iter().map(|k| k.as_biguint().clone()).collect();
        let a: TrieSet = ka.into_iter().collect();
        let b: TrieSet = kb.into_iter().collect();

        let as_model = |s: &TrieSet| -> BTreeSet<BigUint> {
            s.iter().map(Key::into_biguint).collect()
        };

        let union = a.union(&b);
        let inter = a.intersection(&b);
        let diff = a.difference(&b);
        for s in [&union, &inter, &diff] {
            assert_canonical(&s.map.root);
        }

        prop_assert_eq!(as_model(&union), sa.union(&sb).cloned().collect::<BTreeSet<_>>());
        prop_assert_eq!(as_model(&inter), sa.intersection(&sb).cloned().collect::<BTreeSet<_>>());
        prop_assert_eq!(as_model(&diff), sa.difference(&sb).cloned().collect::<BTreeSet<_>>());

        // Set equality is extensional too: rebuilding the union from its
        // members in model order reproduces the identical tree.
        let rebuilt: TrieSet = as_model(&union)
            .into_iter()
            .map(|n| Key::new(n).unwrap())
            .collect();
        prop_assert_eq!(rebuilt, union);
    }
}
