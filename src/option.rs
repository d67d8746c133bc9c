//! Optional values.
//!
//! [`Option<T>`] is either [`Some`](Option::Some) and carries a value, or
//! [`None`](Option::None) and carries nothing. Every combinator returns a fresh
//! value except the in-place mutators [`take`](Option::take),
//! [`replace`](Option::replace), [`insert`](Option::insert) and the
//! `get_or_insert*` family, which swap the variant of `self` and keep its
//! location.
//!
//! ```
//! use entryway::Option;
//!
//! fn divide(numerator: f64, denominator: f64) -> Option<f64> {
//!     if denominator == 0.0 {
//!         Option::None
//!     } else {
//!         Option::Some(numerator / denominator)
//!     }
//! }
//!
//! assert_eq!(divide(2.0, 0.0), Option::None);
//! assert_eq!(divide(3.0, 2.0).unwrap_or(0.0), 1.5);
//! ```

use crate::error::{fail, UnwrapError, UnwrapErrorKind};
use crate::result::Result;
use crate::slot_ref::Ref;
use core::cmp::Ordering;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Option<T> {
    Some(T),
    None,
}

impl<T> Default for Option<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> Option<T> {
    /// Wrap a standard optional value.
    #[inline]
    pub fn from_optional(opt: core::option::Option<T>) -> Self {
        match opt {
            Some(v) => Self::Some(v),
            None => Self::None,
        }
    }

    /// Unwrap into a standard optional value.
    #[inline]
    pub fn into_optional(self) -> core::option::Option<T> {
        match self {
            Self::Some(v) => Some(v),
            Self::None => None,
        }
    }

    #[inline]
    pub fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    #[inline]
    pub fn is_some_and(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Self::Some(v) => f(v),
            Self::None => false,
        }
    }

    #[inline]
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Some(v) => Option::Some(v),
            Self::None => Option::None,
        }
    }

    #[inline]
    pub fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Some(v) => Option::Some(v),
            Self::None => Option::None,
        }
    }

    /// Returns the payload, or panics with an [`UnwrapError`] carrying `msg`.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Self::Some(v) => v,
            Self::None => fail(UnwrapError::new(UnwrapErrorKind::NoneValue).with_message(msg)),
        }
    }

    /// Returns the payload, or panics with an [`UnwrapError`] of kind
    /// [`UnwrapErrorKind::NoneValue`].
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(v) => v,
            Self::None => fail(UnwrapError::new(UnwrapErrorKind::NoneValue)),
        }
    }

    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(v) => v,
            Self::None => default,
        }
    }

    #[inline]
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        match self {
            Self::Some(v) => v,
            Self::None => f(),
        }
    }

    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Option<U> {
        match self {
            Self::Some(v) => Option::Some(f(v)),
            Self::None => Option::None,
        }
    }

    #[inline]
    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U {
        match self {
            Self::Some(v) => f(v),
            Self::None => default,
        }
    }

    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(v) => f(v),
            Self::None => default(),
        }
    }

    #[inline]
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Self::Some(v) => Result::Ok(v),
            Self::None => Result::Err(err),
        }
    }

    #[inline]
    pub fn ok_or_else<E, F: FnOnce() -> E>(self, err: F) -> Result<T, E> {
        match self {
            Self::Some(v) => Result::Ok(v),
            Self::None => Result::Err(err()),
        }
    }

    /// `None` if `self` is `None`, otherwise `optb`.
    #[inline]
    pub fn and<U>(self, optb: Option<U>) -> Option<U> {
        match self {
            Self::Some(_) => optb,
            Self::None => Option::None,
        }
    }

    #[inline]
    pub fn and_then<U, F: FnOnce(T) -> Option<U>>(self, f: F) -> Option<U> {
        match self {
            Self::Some(v) => f(v),
            Self::None => Option::None,
        }
    }

    #[inline]
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        match self {
            Self::Some(v) if predicate(&v) => Self::Some(v),
            _ => Self::None,
        }
    }

    #[inline]
    pub fn or(self, optb: Option<T>) -> Option<T> {
        match self {
            Self::Some(v) => Self::Some(v),
            Self::None => optb,
        }
    }

    #[inline]
    pub fn or_else<F: FnOnce() -> Option<T>>(self, f: F) -> Option<T> {
        match self {
            Self::Some(v) => Self::Some(v),
            Self::None => f(),
        }
    }

    /// `Some` iff exactly one of `self` and `optb` is `Some`.
    #[inline]
    pub fn xor(self, optb: Option<T>) -> Option<T> {
        match (self, optb) {
            (Self::Some(a), Self::None) => Self::Some(a),
            (Self::None, Self::Some(b)) => Self::Some(b),
            _ => Self::None,
        }
    }

    #[inline]
    pub fn zip<U>(self, other: Option<U>) -> Option<(T, U)> {
        match (self, other) {
            (Self::Some(a), Option::Some(b)) => Option::Some((a, b)),
            _ => Option::None,
        }
    }

    /// Store `value` in place, dropping any previous payload, and return a
    /// `Ref` to it.
    pub fn insert(&mut self, value: T) -> Ref<'_, T> {
        *self = Self::Some(value);
        self.payload_ref()
    }

    pub fn get_or_insert(&mut self, value: T) -> Ref<'_, T> {
        self.get_or_insert_with(|| value)
    }

    /// If `None`, store `f()` in place. Returns a `Ref` to the payload; `f`
    /// only runs when the option was empty.
    ///
    /// ```
    /// use entryway::Option;
    ///
    /// let mut x: Option<u32> = Option::None;
    /// {
    ///     let mut y = x.get_or_insert_with(|| 5);
    ///     assert_eq!(*y, 5);
    ///     y.set(7);
    /// }
    /// assert_eq!(x, Option::Some(7));
    /// ```
    pub fn get_or_insert_with<F: FnOnce() -> T>(&mut self, f: F) -> Ref<'_, T> {
        if self.is_none() {
            *self = Self::Some(f());
        }
        self.payload_ref()
    }

    pub fn get_or_insert_default(&mut self) -> Ref<'_, T>
    where
        T: Default,
    {
        self.get_or_insert_with(T::default)
    }

    fn payload_ref(&mut self) -> Ref<'_, T> {
        match self {
            Self::Some(v) => Ref::new(v),
            Self::None => unreachable!("payload_ref called on an empty option"),
        }
    }

    /// Move the payload out, leaving `None` behind.
    ///
    /// ```
    /// use entryway::Option;
    ///
    /// let mut x = Option::Some(2);
    /// assert_eq!(x.take(), Option::Some(2));
    /// assert_eq!(x, Option::None);
    /// assert_eq!(x.take(), Option::None);
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        core::mem::replace(self, Self::None)
    }

    /// Store `Some(value)` and return the previous contents.
    #[inline]
    pub fn replace(&mut self, value: T) -> Self {
        core::mem::replace(self, Self::Some(value))
    }

    /// Iterate over the payload. Each call starts from the current state.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_ref().into_optional(),
        }
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: self.as_mut().into_optional(),
        }
    }
}

impl<T> Option<Option<T>> {
    #[inline]
    pub fn flatten(self) -> Option<T> {
        match self {
            Self::Some(inner) => inner,
            Self::None => Option::None,
        }
    }
}

impl<T, E> Option<Result<T, E>> {
    /// `Option<Result<T, E>>` into `Result<Option<T>, E>`.
    #[inline]
    pub fn transpose(self) -> Result<Option<T>, E> {
        match self {
            Self::Some(Result::Ok(v)) => Result::Ok(Option::Some(v)),
            Self::Some(Result::Err(e)) => Result::Err(e),
            Self::None => Result::Ok(Option::None),
        }
    }
}

impl<T: Clone> Option<&T> {
    #[inline]
    pub fn cloned(self) -> Option<T> {
        self.map(T::clone)
    }
}

impl<T: Copy> Option<&T> {
    #[inline]
    pub fn copied(self) -> Option<T> {
        self.map(|v| *v)
    }
}

// Payloads are compared only when both sides are `Some`; mixed variants have
// no ordering.
impl<T: PartialOrd> PartialOrd for Option<T> {
    fn partial_cmp(&self, other: &Self) -> core::option::Option<Ordering> {
        match (self, other) {
            (Self::Some(a), Self::Some(b)) => a.partial_cmp(b),
            (Self::None, Self::None) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl<T> From<core::option::Option<T>> for Option<T> {
    fn from(opt: core::option::Option<T>) -> Self {
        Self::from_optional(opt)
    }
}

impl<T> From<Option<T>> for core::option::Option<T> {
    fn from(opt: Option<T>) -> Self {
        opt.into_optional()
    }
}

/// Iterator over a borrowed payload. Yields at most one item.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: core::option::Option<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(inner: core::option::Option<&'a T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> core::option::Option<&'a T> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, core::option::Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

#[derive(Debug)]
pub struct IterMut<'a, T> {
    inner: core::option::Option<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> core::option::Option<&'a mut T> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, core::option::Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    inner: core::option::Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> core::option::Option<T> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, core::option::Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for Option<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.into_optional(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Option<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Option<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
