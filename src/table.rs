//! Slot table: a hashed index over generational slot storage.
//!
//! `index` holds slot keys and is probed with the hash stored next to each
//! entry, so `K: Hash` runs once per lookup key and never while the index
//! grows. `slots` owns the entries. Removing an entry bumps its slot
//! generation, so a [`Handle`] to it can never name a later entry.
//!
//! This layer speaks `core::option::Option`; the public map converts.

use crate::entry::{Entry, OccupiedEntry, VacantEntry};
use crate::reentrancy::ProbeGuard;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::sync::atomic::{AtomicU64, Ordering};
use hashbrown::hash_table::{self, HashTable};
use slotmap::{DefaultKey, SlotMap};

/// Identity of one table. Slot keys restart from the same values in every
/// table, so a handle carries the id of the table that issued it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub(crate) struct TableId(u64);

impl TableId {
    fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        TableId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Detached, copyable name for one map entry.
///
/// Unlike a [`Ref`](crate::Ref), a handle does not borrow the map. Resolving
/// it after its entry was removed, or against a map other than the one that
/// issued it (a clone counts as another map), yields a
/// [`StaleHandle`](crate::StaleHandle) error.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Handle {
    table: TableId,
    key: DefaultKey,
}

impl Handle {
    pub(crate) fn new(table: TableId, key: DefaultKey) -> Self {
        Handle { table, key }
    }

    pub(crate) fn raw(self) -> DefaultKey {
        self.key
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Slot<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) hash: u64,
}

pub(crate) type Slots<K, V> = SlotMap<DefaultKey, Slot<K, V>>;

pub(crate) struct Table<K, V, S> {
    id: TableId,
    hasher: S,
    index: HashTable<DefaultKey>,
    slots: Slots<K, V>,
    probe: ProbeGuard,
}

// A clone is a separate table: handles into the original do not resolve in it.
impl<K: Clone, V: Clone, S: Clone> Clone for Table<K, V, S> {
    fn clone(&self) -> Self {
        Self {
            id: TableId::fresh(),
            hasher: self.hasher.clone(),
            index: self.index.clone(),
            slots: self.slots.clone(),
            probe: self.probe.clone(),
        }
    }
}

impl<K, V, S> Table<K, V, S> {
    pub(crate) fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    pub(crate) fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            id: TableId::fresh(),
            hasher,
            index: HashTable::with_capacity(capacity),
            slots: SlotMap::with_capacity_and_key(capacity),
            probe: ProbeGuard::new(),
        }
    }

    /// Whether `h` was issued by this table.
    pub(crate) fn owns(&self, h: Handle) -> bool {
        h.table == self.id
    }

    pub(crate) fn hasher(&self) -> &S {
        &self.hasher
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.index.capacity().min(self.slots.capacity())
    }

    pub(crate) fn slot(&self, h: Handle) -> Option<&Slot<K, V>> {
        if !self.owns(h) {
            return None;
        }
        self.slots.get(h.raw())
    }

    pub(crate) fn slot_mut(&mut self, h: Handle) -> Option<&mut Slot<K, V>> {
        if !self.owns(h) {
            return None;
        }
        self.slots.get_mut(h.raw())
    }

    pub(crate) fn slots(&self) -> &Slots<K, V> {
        &self.slots
    }

    pub(crate) fn slots_mut(&mut self) -> &mut Slots<K, V> {
        &mut self.slots
    }

    pub(crate) fn into_slots(self) -> Slots<K, V> {
        self.slots
    }

    /// Unlink and return the entry named by `h`, if it is still live.
    pub(crate) fn remove_handle(&mut self, h: Handle) -> Option<Slot<K, V>> {
        if !self.owns(h) {
            return None;
        }
        let _p = self.probe.enter();
        let k = h.raw();
        let slot = self.slots.remove(k)?;
        if let Ok(entry) = self.index.find_entry(slot.hash, |&kk| kk == k) {
            let _ = entry.remove();
        }
        Some(slot)
    }

    /// Visit a snapshot of the live entries taken before the first call to
    /// `keep`; entries for which it returns `false` are removed. Returns the
    /// number removed.
    pub(crate) fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let snapshot: Vec<DefaultKey> = self.slots.keys().collect();
        let mut removed = 0;
        for k in snapshot {
            let Some(slot) = self.slots.get_mut(k) else {
                continue;
            };
            if !keep(&slot.key, &mut slot.value) {
                self.remove_handle(Handle::new(self.id, k));
                removed += 1;
            }
        }
        removed
    }

    pub(crate) fn clear(&mut self) {
        self.index.clear();
        self.slots.clear();
    }

    /// Unlink every entry now and return them. Index and storage are both
    /// empty before the caller sees the first entry, so nothing the caller
    /// does with the result (including leaking it) can split them.
    pub(crate) fn drain(&mut self) -> Vec<Slot<K, V>> {
        self.index.clear();
        self.slots.drain().map(|(_, s)| s).collect()
    }
}

impl<K, V, S> Table<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn make_hash<Q>(&self, q: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(q)
    }

    pub(crate) fn find<Q>(&self, q: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _p = self.probe.enter();
        let hash = self.make_hash(q);
        self.index
            .find(hash, |&k| {
                self.slots
                    .get(k)
                    .is_some_and(|s| s.key.borrow() == q)
            })
            .map(|&k| Handle::new(self.id, k))
    }

    pub(crate) fn get<Q>(&self, q: &Q) -> Option<&Slot<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let h = self.find(q)?;
        self.slot(h)
    }

    pub(crate) fn get_mut<Q>(&mut self, q: &Q) -> Option<&mut Slot<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let h = self.find(q)?;
        self.slot_mut(h)
    }

    pub(crate) fn contains_key<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.find(q).is_some()
    }

    /// Probe once for `key` and keep the probe result in the returned view.
    pub(crate) fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        let Self {
            id,
            hasher,
            index,
            slots,
            probe,
        } = self;
        let _p = probe.enter();
        let hash = hasher.hash_one(&key);
        let found = index.entry(
            hash,
            |&k| slots.get(k).is_some_and(|s| s.key == key),
            |&k| slots.get(k).map_or(0, |s| s.hash),
        );
        match found {
            hash_table::Entry::Occupied(index) => {
                Entry::Occupied(OccupiedEntry::new(*id, index, slots))
            }
            hash_table::Entry::Vacant(index) => {
                Entry::Vacant(VacantEntry::new(key, hash, *id, index, slots))
            }
        }
    }

    pub(crate) fn remove<Q>(&mut self, q: &Q) -> Option<Slot<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let k = {
            let _p = self.probe.enter();
            let hash = self.make_hash(q);
            let slots = &self.slots;
            match self
                .index
                .find_entry(hash, |&k| slots.get(k).is_some_and(|s| s.key.borrow() == q))
            {
                Ok(entry) => entry.remove().0,
                Err(_) => return None,
            }
        };
        self.slots.remove(k)
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        let slots = &self.slots;
        self.index
            .reserve(additional, |&k| slots.get(k).map_or(0, |s| s.hash));
        self.slots.reserve(additional);
    }
}
