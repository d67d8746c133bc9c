//! Success-or-error values.
//!
//! [`Result<T, E>`] is [`Ok`](Result::Ok) with a value or [`Err`](Result::Err)
//! with an error. There is no shared default state: building one means
//! picking exactly one side.
//!
//! ```
//! use entryway::Result;
//!
//! #[derive(Debug, PartialEq)]
//! enum Version {
//!     V1,
//!     V2,
//! }
//!
//! fn parse_version(header: &[u8]) -> Result<Version, &'static str> {
//!     match header.first() {
//!         None => Result::Err("invalid header length"),
//!         Some(1) => Result::Ok(Version::V1),
//!         Some(2) => Result::Ok(Version::V2),
//!         Some(_) => Result::Err("invalid version"),
//!     }
//! }
//!
//! assert_eq!(parse_version(&[1, 2, 3, 4]), Result::Ok(Version::V1));
//! assert!(parse_version(&[]).is_err());
//! ```

use crate::error::{fail, UnwrapError, UnwrapErrorKind};
use crate::option::{self, Option};
use core::cmp::Ordering;
use core::fmt;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Result<T, E> {
    Ok(T),
    Err(E),
}

impl<T, E> Result<T, E> {
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    #[inline]
    pub fn is_ok_and(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Self::Ok(v) => f(v),
            Self::Err(_) => false,
        }
    }

    #[inline]
    pub fn is_err_and(self, f: impl FnOnce(E) -> bool) -> bool {
        match self {
            Self::Ok(_) => false,
            Self::Err(e) => f(e),
        }
    }

    /// Project the success side, discarding any error.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(v) => Option::Some(v),
            Self::Err(_) => Option::None,
        }
    }

    /// Project the error side, discarding any success value.
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => Option::None,
            Self::Err(e) => Option::Some(e),
        }
    }

    #[inline]
    pub fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Self::Ok(v) => Result::Ok(v),
            Self::Err(e) => Result::Err(e),
        }
    }

    #[inline]
    pub fn as_mut(&mut self) -> Result<&mut T, &mut E> {
        match self {
            Self::Ok(v) => Result::Ok(v),
            Self::Err(e) => Result::Err(e),
        }
    }

    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, op: F) -> Result<U, E> {
        match self {
            Self::Ok(v) => Result::Ok(op(v)),
            Self::Err(e) => Result::Err(e),
        }
    }

    #[inline]
    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U {
        match self {
            Self::Ok(v) => f(v),
            Self::Err(_) => default,
        }
    }

    /// Fold to one value; `default` receives the error.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(v) => f(v),
            Self::Err(e) => default(e),
        }
    }

    #[inline]
    pub fn map_err<F, O: FnOnce(E) -> F>(self, op: O) -> Result<T, F> {
        match self {
            Self::Ok(v) => Result::Ok(v),
            Self::Err(e) => Result::Err(op(e)),
        }
    }

    #[inline]
    pub fn and<U>(self, res: Result<U, E>) -> Result<U, E> {
        match self {
            Self::Ok(_) => res,
            Self::Err(e) => Result::Err(e),
        }
    }

    #[inline]
    pub fn and_then<U, F: FnOnce(T) -> Result<U, E>>(self, op: F) -> Result<U, E> {
        match self {
            Self::Ok(v) => op(v),
            Self::Err(e) => Result::Err(e),
        }
    }

    #[inline]
    pub fn or<F>(self, res: Result<T, F>) -> Result<T, F> {
        match self {
            Self::Ok(v) => Result::Ok(v),
            Self::Err(_) => res,
        }
    }

    #[inline]
    pub fn or_else<F, O: FnOnce(E) -> Result<T, F>>(self, op: O) -> Result<T, F> {
        match self {
            Self::Ok(v) => Result::Ok(v),
            Self::Err(e) => op(e),
        }
    }

    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(v) => v,
            Self::Err(_) => default,
        }
    }

    #[inline]
    pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, op: F) -> T {
        match self {
            Self::Ok(v) => v,
            Self::Err(e) => op(e),
        }
    }

    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }

    /// Iterate over the success value, if any.
    #[inline]
    pub fn iter(&self) -> option::Iter<'_, T> {
        option::Iter::new(self.as_ref().ok().into_optional())
    }

    pub fn into_std(self) -> core::result::Result<T, E> {
        match self {
            Self::Ok(v) => Ok(v),
            Self::Err(e) => Err(e),
        }
    }
}

impl<T, E: fmt::Debug> Result<T, E> {
    /// Returns the success value, or panics with an [`UnwrapError`] of kind
    /// [`UnwrapErrorKind::ErrValue`] carrying the error's `Debug` text.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(v) => v,
            Self::Err(e) => fail(UnwrapError::new(UnwrapErrorKind::ErrValue).with_payload(&e)),
        }
    }

    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Self::Ok(v) => v,
            Self::Err(e) => fail(
                UnwrapError::new(UnwrapErrorKind::ErrValue)
                    .with_message(msg)
                    .with_payload(&e),
            ),
        }
    }
}

impl<T: fmt::Debug, E> Result<T, E> {
    /// Returns the error, or panics with an [`UnwrapError`] of kind
    /// [`UnwrapErrorKind::OkValue`] carrying the success value's `Debug` text.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Self::Ok(v) => fail(UnwrapError::new(UnwrapErrorKind::OkValue).with_payload(&v)),
            Self::Err(e) => e,
        }
    }

    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E {
        match self {
            Self::Ok(v) => fail(
                UnwrapError::new(UnwrapErrorKind::OkValue)
                    .with_message(msg)
                    .with_payload(&v),
            ),
            Self::Err(e) => e,
        }
    }
}

impl<T, E> Result<Option<T>, E> {
    /// `Result<Option<T>, E>` into `Option<Result<T, E>>`.
    #[inline]
    pub fn transpose(self) -> Option<Result<T, E>> {
        match self {
            Self::Ok(Option::Some(v)) => Option::Some(Result::Ok(v)),
            Self::Ok(Option::None) => Option::None,
            Self::Err(e) => Option::Some(Result::Err(e)),
        }
    }
}

// Same rule as `Option`: only same-variant payloads are ordered.
impl<T: PartialOrd, E: PartialOrd> PartialOrd for Result<T, E> {
    fn partial_cmp(&self, other: &Self) -> core::option::Option<Ordering> {
        match (self, other) {
            (Self::Ok(a), Self::Ok(b)) => a.partial_cmp(b),
            (Self::Err(a), Self::Err(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl<T, E> From<core::result::Result<T, E>> for Result<T, E> {
    fn from(res: core::result::Result<T, E>) -> Self {
        match res {
            Ok(v) => Self::Ok(v),
            Err(e) => Self::Err(e),
        }
    }
}

impl<T, E> From<Result<T, E>> for core::result::Result<T, E> {
    fn from(res: Result<T, E>) -> Self {
        res.into_std()
    }
}

impl<T, E> IntoIterator for Result<T, E> {
    type Item = T;
    type IntoIter = option::IntoIter<T>;

    fn into_iter(self) -> option::IntoIter<T> {
        self.ok().into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Result<T, E> {
    type Item = &'a T;
    type IntoIter = option::Iter<'a, T>;

    fn into_iter(self) -> option::Iter<'a, T> {
        self.iter()
    }
}
