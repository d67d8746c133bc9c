// Handle test suite.
//
// A Handle names one entry without borrowing the map. Invariants exercised:
// - A handle resolves while its entry is live, through any later borrow of
//   the map.
// - Once the entry is removed, the handle is stale forever: resolving it
//   returns StaleHandle, even after the same key is inserted again and the
//   storage slot is reused.
// - remove_handle removes exactly the named entry.
// - Owner identity: a handle only resolves in the map that issued it. Every
//   other map, clones included, rejects it with StaleHandle::WrongMap and
//   remove_handle leaves that map untouched.
use entryway::{Entry, HashMap, Option, Result, StaleHandle};

#[test]
fn handle_resolves_while_live() {
    let mut m: HashMap<String, u32> = HashMap::new();
    m.insert("a".into(), 1);
    let h = m.handle("a").unwrap();
    assert_eq!(h.key(&m), Result::Ok(&"a".to_string()));
    assert_eq!(h.value(&m), Result::Ok(&1));

    h.value_mut(&mut m).unwrap().set(5);
    assert_eq!(m["a"], 5);

    // Unrelated inserts and removals do not disturb the handle.
    for i in 0..64 {
        m.insert(format!("k{i}"), i);
    }
    for i in 0..32 {
        m.remove(format!("k{i}").as_str());
    }
    assert_eq!(h.value(&m), Result::Ok(&5));
}

// Test: removal makes the handle stale, and reinsertion does not revive it.
#[test]
fn handle_goes_stale_after_remove() {
    let mut m: HashMap<&str, i32> = HashMap::new();
    m.insert("x", 1);
    let h = m.handle("x").unwrap();
    assert_eq!(m.remove("x"), Option::Some(1));

    assert_eq!(h.value(&m), Result::Err(StaleHandle::Removed { handle: h }));
    assert!(h.key(&m).is_err());
    assert!(h.value_mut(&mut m).is_err());

    m.insert("x", 2);
    assert!(h.value(&m).is_err());
    let fresh = m.handle("x").unwrap();
    assert_ne!(fresh, h);
    assert_eq!(fresh.value(&m), Result::Ok(&2));
}

#[test]
fn stale_handle_display() {
    let mut m: HashMap<i32, i32> = HashMap::new();
    m.insert(1, 1);
    let h = m.handle(&1).unwrap();
    m.clear();
    let err = h.value(&m).unwrap_err();
    assert!(err.to_string().starts_with("stale handle"));
}

// Test: an occupied entry reports the same handle as a lookup.
#[test]
fn entry_handle_matches_lookup() {
    let mut m: HashMap<u8, u8> = HashMap::new();
    let h = match m.entry(3) {
        Entry::Vacant(v) => v.insert_entry(30).handle(),
        Entry::Occupied(_) => unreachable!(),
    };
    assert_eq!(m.handle(&3), Option::Some(h));
}

#[test]
fn remove_handle_removes_named_entry() {
    let mut m: HashMap<u8, &str> = HashMap::from([(1, "one"), (2, "two")]);
    let h = m.handle(&2).unwrap();
    assert_eq!(m.remove_handle(h), Option::Some((2, "two")));
    assert_eq!(m.remove_handle(h), Option::None);
    assert_eq!(m.len(), 1);
    assert!(m.contains_key(&1));
}

// Test: drain and into_iter invalidate every handle taken before them.
#[test]
fn drain_invalidates_handles() {
    let mut m: HashMap<u8, u8> = (0..4).map(|i| (i, i)).collect();
    let handles: Vec<_> = (0..4).map(|i| m.handle(&i).unwrap()).collect();
    m.drain().for_each(drop);
    m.extend((0..4).map(|i| (i, i)));
    for h in handles {
        assert!(h.value(&m).is_err());
    }
}

// Test: owner identity enforcement.
// Assumes: both maps hand out their first slot for their first insert.
// Verifies: a handle from one map neither reads nor removes the other map's
// entry, and the error says which way it failed.
#[test]
fn wrong_map_handles_are_rejected() {
    let mut a: HashMap<&str, i32> = HashMap::new();
    a.insert("a", 1);
    let mut b: HashMap<&str, i32> = HashMap::new();
    b.insert("z", 99);
    let h = a.handle("a").unwrap();

    assert_eq!(h.value(&b), Result::Err(StaleHandle::WrongMap { handle: h }));
    assert!(h.key(&b).is_err());
    assert!(h.value_mut(&mut b).is_err());
    assert_eq!(b.remove_handle(h), Option::None);
    assert_eq!(b.len(), 1);
    assert_eq!(b["z"], 99);

    // The issuing map still resolves it.
    assert_eq!(h.value(&a), Result::Ok(&1));
    let err = h.value(&b).unwrap_err();
    assert_eq!(err.handle(), h);
    assert!(err.to_string().contains("different map"));
}

// Test: a clone is a different map for handle purposes.
#[test]
fn clone_does_not_accept_original_handles() {
    let mut m: HashMap<u8, u8> = HashMap::from([(1, 10)]);
    let h = m.handle(&1).unwrap();
    let mut copy = m.clone();
    assert_eq!(copy, m);
    assert!(matches!(h.value(&copy), Result::Err(StaleHandle::WrongMap { .. })));
    assert_eq!(copy.remove_handle(h), Option::None);
    assert_eq!(copy.len(), 1);

    let own = copy.handle(&1).unwrap();
    assert_ne!(own, h);
    assert_eq!(own.value(&copy), Result::Ok(&10));
    assert_eq!(m.remove_handle(h), Option::Some((1, 10)));
}
