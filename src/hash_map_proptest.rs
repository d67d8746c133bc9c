// Property tests for HashMap, checked against std::collections::HashMap.

use crate::{Entry, Handle, HashMap, Option as Opt};
use proptest::prelude::*;
use std::cell::Cell;
use std::collections::HashMap as StdMap;

// Pool-indexed operations: indices shrink toward earlier keys, the pool
// shrinks in length, and op lists shrink in length.
#[derive(Clone, Debug)]
enum Op {
    Insert(usize, i32),
    OrInsertWith(usize, i32),
    AndModifyOrInsert(usize, i32),
    Remove(usize),
    RemoveEntry(usize),
    Get(usize),
    Contains(String),
    Retain(i32),
    ValuesMut(i32),
    Extend(Vec<(usize, i32)>),
    Drain,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<Op>)> {
    proptest::collection::vec("[a-z]{0,4}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            4 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
            3 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::OrInsertWith(i, v)),
            3 => (idx.clone(), -100i32..100).prop_map(|(i, v)| Op::AndModifyOrInsert(i, v)),
            2 => idx.clone().prop_map(Op::Remove),
            1 => idx.clone().prop_map(Op::RemoveEntry),
            2 => idx.clone().prop_map(Op::Get),
            1 => prop_oneof![contains_pool, "[a-z]{0,4}"].prop_map(Op::Contains),
            1 => (2i32..5).prop_map(Op::Retain),
            1 => (-10i32..10).prop_map(Op::ValuesMut),
            1 => proptest::collection::vec((idx.clone(), any::<i32>()), 0..5).prop_map(Op::Extend),
            1 => Just(Op::Drain),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn check_agrees(sut: &HashMap<String, i32>, model: &StdMap<String, i32>) -> Result<(), TestCaseError> {
    prop_assert_eq!(sut.len(), model.len());
    prop_assert_eq!(sut.is_empty(), model.is_empty());
    for (k, v) in model {
        prop_assert_eq!(sut.get(k.as_str()), Opt::Some(v));
    }
    let mut seen: Vec<&String> = sut.keys().collect();
    seen.sort();
    let mut expected: Vec<&String> = model.keys().collect();
    expected.sort();
    prop_assert_eq!(seen, expected);
    Ok(())
}

// Property: state-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `insert` returns the previous value; the last write wins.
// - `or_insert_with` runs its default exactly when the key was absent.
// - `and_modify(..).or_insert(..)` modifies only occupied entries.
// - `retain` visits each live key once and keeps exactly the accepted ones.
// - Handles taken before a removal go stale and never resolve again.
// - `len`/`keys`/`get` parity with the model after every op.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let mut sut: HashMap<String, i32> = HashMap::new();
        let mut model: StdMap<String, i32> = StdMap::new();
        let mut stale: Vec<Handle> = Vec::new();
        let default_calls = Cell::new(0usize);

        for op in ops {
            match op {
                Op::Insert(i, v) => {
                    let k = pool[i].clone();
                    let prev = sut.insert(k.clone(), v);
                    prop_assert_eq!(prev.into_optional(), model.insert(k, v));
                }
                Op::OrInsertWith(i, v) => {
                    let k = pool[i].clone();
                    let before = default_calls.get();
                    let was_present = model.contains_key(&k);
                    let got = *sut.entry(k.clone()).or_insert_with(|| {
                        default_calls.set(default_calls.get() + 1);
                        v
                    });
                    let want = *model.entry(k).or_insert(v);
                    prop_assert_eq!(got, want);
                    prop_assert_eq!(default_calls.get(), before + usize::from(!was_present));
                }
                Op::AndModifyOrInsert(i, v) => {
                    let k = pool[i].clone();
                    let got = *sut
                        .entry(k.clone())
                        .and_modify(|r| { r.modify(|x| x.wrapping_add(v)); })
                        .or_insert(v);
                    let want = *model
                        .entry(k)
                        .and_modify(|x| *x = x.wrapping_add(v))
                        .or_insert(v);
                    prop_assert_eq!(got, want);
                }
                Op::Remove(i) => {
                    let k = &pool[i];
                    let handle = sut.handle(k.as_str());
                    prop_assert_eq!(handle.is_some(), model.contains_key(k));
                    prop_assert_eq!(sut.remove(k.as_str()).into_optional(), model.remove(k));
                    if let Opt::Some(h) = handle {
                        stale.push(h);
                    }
                }
                Op::RemoveEntry(i) => {
                    let k = pool[i].clone();
                    let got = match sut.entry(k.clone()) {
                        Entry::Occupied(o) => Some(o.remove_entry()),
                        Entry::Vacant(_) => None,
                    };
                    prop_assert_eq!(got, model.remove_entry(&k));
                }
                Op::Get(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.get(k.as_str()).into_optional(), model.get(k));
                    prop_assert_eq!(sut.contains_key(k.as_str()), model.contains_key(k));
                }
                Op::Contains(s) => {
                    prop_assert_eq!(sut.contains_key(s.as_str()), model.contains_key(&s));
                }
                Op::Retain(m) => {
                    let mut visited = 0usize;
                    sut.retain(|_, v| {
                        visited += 1;
                        *v % m != 0
                    });
                    prop_assert_eq!(visited, model.len());
                    model.retain(|_, v| *v % m != 0);
                }
                Op::ValuesMut(d) => {
                    for r in sut.values_mut() {
                        r.modify(|x| x.wrapping_add(d));
                    }
                    for v in model.values_mut() {
                        *v = v.wrapping_add(d);
                    }
                }
                Op::Extend(pairs) => {
                    let pairs: Vec<(String, i32)> =
                        pairs.into_iter().map(|(i, v)| (pool[i].clone(), v)).collect();
                    sut.extend(pairs.clone());
                    model.extend(pairs);
                }
                Op::Drain => {
                    let mut drained: Vec<(String, i32)> = sut.drain().collect();
                    drained.sort();
                    let mut want: Vec<(String, i32)> = model.drain().collect();
                    want.sort();
                    prop_assert_eq!(drained, want);
                }
            }

            check_agrees(&sut, &model)?;
            for h in &stale {
                prop_assert!(h.value(&sut).is_err(), "stale handle resolved");
            }
        }
    }
}
