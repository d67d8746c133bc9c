//! `Ref`: a settable reference to a value stored in someone else's slot.
//!
//! A `Ref` is handed out by the in-place mutators of [`Option`](crate::Option)
//! and by the map's entry and iteration APIs. It holds an exclusive borrow of
//! the slot, so the slot cannot be removed or moved while the `Ref` is alive.
//! References that must outlive a borrow use [`Handle`](crate::Handle) instead.

use core::fmt;
use core::ops::{Deref, DerefMut};

pub struct Ref<'a, T: ?Sized> {
    slot: &'a mut T,
}

impl<'a, T: ?Sized> Ref<'a, T> {
    #[inline]
    pub fn new(slot: &'a mut T) -> Self {
        Self { slot }
    }

    /// Current value at the slot.
    #[inline]
    pub fn get(&self) -> &T {
        self.slot
    }

    /// Give up the `Ref` and keep the underlying borrow.
    #[inline]
    pub fn into_mut(self) -> &'a mut T {
        self.slot
    }
}

impl<'a, T> Ref<'a, T> {
    /// Overwrite the slot.
    #[inline]
    pub fn set(&mut self, value: T) {
        *self.slot = value;
    }

    /// Overwrite the slot and return what was there.
    #[inline]
    pub fn replace(&mut self, value: T) -> T {
        core::mem::replace(self.slot, value)
    }

    /// Store `f(current)` into the slot.
    ///
    /// ```
    /// use entryway::HashMap;
    ///
    /// let mut map: HashMap<&str, i32> = HashMap::new();
    /// let r = map.entry("poneyland").or_insert(3).modify(|v| v * 2);
    /// assert_eq!(*r, 6);
    /// ```
    #[inline]
    pub fn modify<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&T) -> T,
    {
        let next = f(self.get());
        self.set(next);
        self
    }
}

impl<'a, T: ?Sized> Deref for Ref<'a, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.slot
    }
}

impl<'a, T: ?Sized> DerefMut for Ref<'a, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        self.slot
    }
}

impl<'a, T: ?Sized> From<&'a mut T> for Ref<'a, T> {
    fn from(slot: &'a mut T) -> Self {
        Self::new(slot)
    }
}

impl<'a, 'b, T, U> PartialEq<Ref<'b, U>> for Ref<'a, T>
where
    T: ?Sized + PartialEq<U>,
    U: ?Sized,
{
    fn eq(&self, other: &Ref<'b, U>) -> bool {
        *self.slot == *other.slot
    }
}

impl<'a, T: ?Sized + fmt::Debug> fmt::Debug for Ref<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ref").field(&self.get()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_hit_the_backing_slot() {
        let mut slot = 1;
        let mut r = Ref::new(&mut slot);
        assert_eq!(*r.get(), 1);
        r.set(5);
        assert_eq!(*r, 5);
        assert_eq!(r.replace(7), 5);
        drop(r);
        assert_eq!(slot, 7);
    }

    #[test]
    fn modify_chains() {
        let mut slot = String::from("a");
        let r = Ref::new(&mut slot)
            .modify(|s| format!("{s}b"))
            .modify(|s| format!("{s}c"));
        assert_eq!(r.get(), "abc");
        assert_eq!(slot, "abc");
    }

    #[test]
    fn deref_mut_writes_through() {
        let mut v = vec![1, 2];
        let mut r = Ref::from(&mut v);
        r.push(3);
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn debug_shows_value() {
        let mut x = Some(3);
        assert_eq!(format!("{:?}", Ref::new(&mut x)), "Ref(Some(3))");
    }
}
