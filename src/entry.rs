//! The entry protocol: a view into one key of a [`HashMap`](crate::HashMap)
//! that is either occupied or vacant.
//!
//! [`HashMap::entry`](crate::HashMap::entry) probes exactly once. The view
//! keeps the probe result, so inserting through a [`VacantEntry`] or removing
//! through an [`OccupiedEntry`] does not search the table again. Views hold an
//! exclusive borrow of the map, which rules out any other mutation for as long
//! as they live.
//!
//! ```
//! use entryway::HashMap;
//!
//! let mut letters = HashMap::new();
//! for ch in "a short treatise on fungi".chars() {
//!     letters.entry(ch).or_insert(0).modify(|n| n + 1);
//! }
//! assert_eq!(letters[&'s'], 2);
//! assert_eq!(letters[&'t'], 3);
//! assert_eq!(letters[&'u'], 1);
//! assert!(letters.get(&'y').is_none());
//! ```

use crate::slot_ref::Ref;
use crate::table::{Handle, Slot, Slots, TableId};
use core::fmt;
use core::mem;
use hashbrown::hash_table;
use slotmap::DefaultKey;

pub enum Entry<'a, K, V> {
    Occupied(OccupiedEntry<'a, K, V>),
    Vacant(VacantEntry<'a, K, V>),
}

impl<'a, K, V> Entry<'a, K, V> {
    /// Ensure a value is present, inserting `default` if the entry is vacant.
    pub fn or_insert(self, default: V) -> Ref<'a, V> {
        self.or_insert_with(|| default)
    }

    /// Ensure a value is present, inserting `default()` if the entry is
    /// vacant. `default` does not run for an occupied entry.
    pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> Ref<'a, V> {
        match self {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(default()),
        }
    }

    /// Like [`or_insert_with`](Self::or_insert_with), with the key passed to
    /// `default`.
    ///
    /// ```
    /// use entryway::HashMap;
    ///
    /// let mut map: HashMap<&str, usize> = HashMap::new();
    /// map.entry("poneyland").or_insert_with_key(|key| key.chars().count());
    /// assert_eq!(map[&"poneyland"], 9);
    /// ```
    pub fn or_insert_with_key<F: FnOnce(&K) -> V>(self, default: F) -> Ref<'a, V> {
        match self {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => {
                let value = default(e.key());
                e.insert(value)
            }
        }
    }

    pub fn or_default(self) -> Ref<'a, V>
    where
        V: Default,
    {
        self.or_insert_with(V::default)
    }

    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(e) => e.key(),
            Entry::Vacant(e) => e.key(),
        }
    }

    /// Run `f` on the value of an occupied entry. A vacant entry is returned
    /// unchanged, which makes this the step before `or_insert*` in a chain.
    ///
    /// ```
    /// use entryway::HashMap;
    ///
    /// let mut map: HashMap<&str, u32> = HashMap::new();
    /// map.entry("poneyland").and_modify(|v| { v.modify(|n| n + 1); }).or_insert(42);
    /// assert_eq!(map[&"poneyland"], 42);
    /// map.entry("poneyland").and_modify(|v| { v.modify(|n| n + 1); }).or_insert(42);
    /// assert_eq!(map[&"poneyland"], 43);
    /// ```
    pub fn and_modify<F>(self, f: F) -> Self
    where
        F: FnOnce(Ref<'_, V>),
    {
        match self {
            Entry::Occupied(mut e) => {
                f(e.get_mut());
                Entry::Occupied(e)
            }
            Entry::Vacant(e) => Entry::Vacant(e),
        }
    }

    /// Store `value` whatever the state and return the now-occupied view.
    pub fn insert_entry(self, value: V) -> OccupiedEntry<'a, K, V> {
        match self {
            Entry::Occupied(mut e) => {
                e.insert(value);
                e
            }
            Entry::Vacant(e) => e.insert_entry(value),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Entry<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Occupied(e) => f.debug_tuple("Entry").field(e).finish(),
            Entry::Vacant(e) => f.debug_tuple("Entry").field(e).finish(),
        }
    }
}

/// A key that was present when [`HashMap::entry`](crate::HashMap::entry) ran.
pub struct OccupiedEntry<'a, K, V> {
    table: TableId,
    index: hash_table::OccupiedEntry<'a, DefaultKey>,
    slots: &'a mut Slots<K, V>,
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    pub(crate) fn new(
        table: TableId,
        index: hash_table::OccupiedEntry<'a, DefaultKey>,
        slots: &'a mut Slots<K, V>,
    ) -> Self {
        Self {
            table,
            index,
            slots,
        }
    }

    fn raw(&self) -> DefaultKey {
        *self.index.get()
    }

    /// The key stored in the map (the one originally inserted).
    pub fn key(&self) -> &K {
        &self.slots[self.raw()].key
    }

    pub fn get(&self) -> &V {
        &self.slots[self.raw()].value
    }

    pub fn get_mut(&mut self) -> Ref<'_, V> {
        let k = self.raw();
        Ref::new(&mut self.slots[k].value)
    }

    /// Turn the view into a `Ref` that lives as long as the map borrow.
    pub fn into_mut(self) -> Ref<'a, V> {
        let Self { index, slots, .. } = self;
        let k = *index.get();
        Ref::new(&mut slots[k].value)
    }

    /// Replace the value and return the old one.
    pub fn insert(&mut self, value: V) -> V {
        mem::replace(&mut *self.get_mut(), value)
    }

    pub fn remove(self) -> V {
        self.remove_entry().1
    }

    /// Evict the entry and return the stored key with its value.
    pub fn remove_entry(self) -> (K, V) {
        let Self { index, slots, .. } = self;
        let (k, _) = index.remove();
        match slots.remove(k) {
            Some(Slot { key, value, .. }) => (key, value),
            None => unreachable!("index named a slot that storage does not hold"),
        }
    }

    /// Detached name for this entry, valid until it is removed.
    pub fn handle(&self) -> Handle {
        Handle::new(self.table, self.raw())
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OccupiedEntry<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OccupiedEntry")
            .field("key", self.key())
            .field("value", self.get())
            .finish()
    }
}

/// A key that was absent when [`HashMap::entry`](crate::HashMap::entry) ran.
pub struct VacantEntry<'a, K, V> {
    key: K,
    hash: u64,
    table: TableId,
    index: hash_table::VacantEntry<'a, DefaultKey>,
    slots: &'a mut Slots<K, V>,
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    pub(crate) fn new(
        key: K,
        hash: u64,
        table: TableId,
        index: hash_table::VacantEntry<'a, DefaultKey>,
        slots: &'a mut Slots<K, V>,
    ) -> Self {
        Self {
            key,
            hash,
            table,
            index,
            slots,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// Give the key back without inserting.
    pub fn into_key(self) -> K {
        self.key
    }

    /// Create the slot with `value` and return a `Ref` to it.
    pub fn insert(self, value: V) -> Ref<'a, V> {
        self.insert_entry(value).into_mut()
    }

    pub fn insert_entry(self, value: V) -> OccupiedEntry<'a, K, V> {
        let Self {
            key,
            hash,
            table,
            index,
            slots,
        } = self;
        let k = slots.insert(Slot { key, value, hash });
        OccupiedEntry::new(table, index.insert(k), slots)
    }
}

impl<K: fmt::Debug, V> fmt::Debug for VacantEntry<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VacantEntry").field(self.key()).finish()
    }
}
