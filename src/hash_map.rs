//! `HashMap`: a key-value store whose in-place mutation goes through
//! [`Entry`] views and [`Ref`] handles.
//!
//! ```
//! use entryway::HashMap;
//!
//! let mut book_reviews: HashMap<&str, &str> = HashMap::new();
//! assert!(book_reviews.insert("Grimms' Fairy Tales", "Masterpiece.").is_none());
//! assert!(book_reviews.insert("Pride and Prejudice", "Very enjoyable.").is_none());
//!
//! if !book_reviews.contains_key("Les Misérables") {
//!     assert_eq!(book_reviews.len(), 2);
//! }
//!
//! book_reviews.remove("Pride and Prejudice");
//! assert_eq!(book_reviews.get("Grimms' Fairy Tales").copied().unwrap(), "Masterpiece.");
//! ```

use crate::entry::Entry;
use crate::error::StaleHandle;
use crate::iter::{
    Drain, IntoIter, IntoKeys, IntoValues, Iter, IterMut, Keys, Values, ValuesMut,
};
use crate::option::Option;
use crate::result::Result;
use crate::slot_ref::Ref;
use crate::table::{Handle, Table};
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::marker::PhantomData;
use core::ops::Index;
use std::collections::hash_map::RandomState;

/// Hash map with entry-protocol mutation.
///
/// Lookups return the crate's [`Option`]; mutable access is handed out as
/// [`Ref`]s. The hasher is chosen through `S` the same way as for
/// `std::collections::HashMap`.
pub struct HashMap<K, V, S = RandomState> {
    table: Table<K, V, S>,
}

impl<K, V> HashMap<K, V, RandomState> {
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<K, V, S> HashMap<K, V, S> {
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            table: Table::with_hasher(hasher),
        }
    }

    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            table: Table::with_capacity_and_hasher(capacity, hasher),
        }
    }

    pub fn hasher(&self) -> &S {
        self.table.hasher()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Entries the map can hold before it must grow.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.table.slots().iter(),
        }
    }

    /// Visit every entry, handing out a [`Ref`] per value.
    ///
    /// ```
    /// use entryway::HashMap;
    ///
    /// let mut map = HashMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// for (_, val) in map.iter_mut() {
    ///     val.modify(|v| v * 2);
    /// }
    /// assert_eq!(map[&"c"], 6);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.table.slots_mut().iter_mut(),
        }
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.iter_mut(),
        }
    }

    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys {
            inner: self.into_iter(),
        }
    }

    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues {
            inner: self.into_iter(),
        }
    }

    /// Remove every entry and yield them as owned pairs. The map is empty as
    /// soon as this returns, even if the iterator is leaked.
    pub fn drain(&mut self) -> Drain<'_, K, V> {
        tracing::trace!(len = self.len(), "draining map");
        Drain {
            inner: self.table.drain().into_iter(),
            _map: PhantomData,
        }
    }

    pub fn clear(&mut self) {
        tracing::trace!(len = self.len(), "clearing map");
        self.table.clear();
    }

    /// Remove the entry named by `handle`. Returns `None` for a stale handle or
    /// one issued by another map.
    pub fn remove_handle(&mut self, handle: Handle) -> Option<(K, V)> {
        self.table
            .remove_handle(handle)
            .map(|s| (s.key, s.value))
            .into()
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn reserve(&mut self, additional: usize) {
        self.table.reserve(additional);
    }

    /// Get the entry for `key`. Whether it is occupied is decided here, once.
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        self.table.entry(key)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.get(key).map(|s| &s.value).into()
    }

    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.get(key).map(|s| (&s.key, &s.value)).into()
    }

    /// A [`Ref`] to the value stored for `key`, if present.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<Ref<'_, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.get_mut(key).map(|s| Ref::new(&mut s.value)).into()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.contains_key(key)
    }

    /// Store `value` under `key` and return the previous value, if any. An
    /// existing key object is kept; only the value is replaced.
    ///
    /// ```
    /// use entryway::{HashMap, Option};
    ///
    /// let mut map = HashMap::new();
    /// assert_eq!(map.insert(37, "a"), Option::None);
    /// assert_eq!(map.insert(37, "b"), Option::Some("a"));
    /// assert_eq!(map[&37], "b");
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.entry(key) {
            Entry::Occupied(mut e) => Option::Some(e.insert(value)),
            Entry::Vacant(e) => {
                e.insert(value);
                Option::None
            }
        }
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.remove(key).map(|s| s.value).into()
    }

    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.remove(key).map(|s| (s.key, s.value)).into()
    }

    /// Keep only the entries for which `f` returns `true`.
    ///
    /// `f` sees every entry that was live when `retain` was called, exactly
    /// once, and may change values through the [`Ref`] it receives.
    ///
    /// ```
    /// use entryway::HashMap;
    ///
    /// let mut map: HashMap<i32, i32> = (0..8).map(|x| (x, x * 10)).collect();
    /// map.retain(|&k, _| k % 2 == 0);
    /// assert_eq!(map.len(), 4);
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, Ref<'_, V>) -> bool,
    {
        let removed = self.table.retain(|k, v| f(k, Ref::new(v)));
        tracing::trace!(removed, remaining = self.len(), "retain finished");
    }

    /// Detached name for the entry stored under `key`.
    pub fn handle<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.find(key).into()
    }
}

impl Handle {
    fn stale(self, owned: bool) -> StaleHandle {
        if owned {
            tracing::debug!(handle = ?self, "resolved a stale handle");
            StaleHandle::Removed { handle: self }
        } else {
            tracing::debug!(handle = ?self, "resolved a handle against a foreign map");
            StaleHandle::WrongMap { handle: self }
        }
    }

    pub fn key<'a, K, V, S>(&self, map: &'a HashMap<K, V, S>) -> Result<&'a K, StaleHandle> {
        let owned = map.table.owns(*self);
        match map.table.slot(*self) {
            Some(s) => Result::Ok(&s.key),
            None => Result::Err(self.stale(owned)),
        }
    }

    pub fn value<'a, K, V, S>(&self, map: &'a HashMap<K, V, S>) -> Result<&'a V, StaleHandle> {
        let owned = map.table.owns(*self);
        match map.table.slot(*self) {
            Some(s) => Result::Ok(&s.value),
            None => Result::Err(self.stale(owned)),
        }
    }

    pub fn value_mut<'a, K, V, S>(
        &self,
        map: &'a mut HashMap<K, V, S>,
    ) -> Result<Ref<'a, V>, StaleHandle> {
        let owned = map.table.owns(*self);
        match map.table.slot_mut(*self) {
            Some(s) => Result::Ok(Ref::new(&mut s.value)),
            None => Result::Err(self.stale(owned)),
        }
    }
}

impl<K, V, S: Default> Default for HashMap<K, V, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K: Clone, V: Clone, S: Clone> Clone for HashMap<K, V, S> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<K, V, S> PartialEq for HashMap<K, V, S>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).map_or(false, |o| *v == *o))
    }
}

impl<K, V, S> Eq for HashMap<K, V, S>
where
    K: Eq + Hash,
    V: Eq,
    S: BuildHasher,
{
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for HashMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Entries<'a, K, V, S>(&'a HashMap<K, V, S>);

        impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for Entries<'_, K, V, S> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_map().entries(self.0.iter()).finish()
            }
        }

        f.debug_tuple("HashMap").field(&Entries(self)).finish()
    }
}

impl<K, Q, V, S> Index<&Q> for HashMap<K, V, S>
where
    K: Eq + Hash + Borrow<Q>,
    Q: ?Sized + Eq + Hash,
    S: BuildHasher,
{
    type Output = V;

    /// Panics with an [`UnwrapError`](crate::UnwrapError) if `key` is absent.
    #[track_caller]
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("key not present in HashMap")
    }
}

impl<K, V, S> Extend<(K, V)> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Insert every pair; a later pair for the same key wins.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K, V, S> Extend<(&'a K, &'a V)> for HashMap<K, V, S>
where
    K: Eq + Hash + Copy,
    V: Copy,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: I) {
        self.extend(iter.into_iter().map(|(&k, &v)| (k, v)));
    }
}

impl<K, V, S> FromIterator<(K, V)> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::with_hasher(S::default());
        map.extend(iter);
        map
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for HashMap<K, V, RandomState>
where
    K: Eq + Hash,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V, S> IntoIterator for HashMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.table.into_slots().into_iter(),
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut HashMap<K, V, S> {
    type Item = (&'a K, Ref<'a, V>);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> IterMut<'a, K, V> {
        self.iter_mut()
    }
}
