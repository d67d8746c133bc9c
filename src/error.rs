//! Error types: fatal unwrap misuse and stale slot handles.

use crate::table::Handle;
use core::fmt;
use derive_more::{Display, Error};

/// Which accessor was called on the wrong variant.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq, Hash)]
pub enum UnwrapErrorKind {
    #[display("called `Option::unwrap()` on a `None` value")]
    NoneValue,
    #[display("called `Result::unwrap()` on an `Err` value")]
    ErrValue,
    #[display("called `Result::unwrap_err()` on an `Ok` value")]
    OkValue,
}

/// Panic payload raised by `unwrap`/`expect` style accessors.
///
/// These are programmer errors. The payload is raised with
/// [`std::panic::panic_any`], so a caller that wants to assert on it can
/// `catch_unwind` and `downcast_ref::<UnwrapError>()`.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub struct UnwrapError {
    kind: UnwrapErrorKind,
    message: core::option::Option<String>,
    payload: core::option::Option<String>,
}

impl UnwrapError {
    pub(crate) fn new(kind: UnwrapErrorKind) -> Self {
        Self {
            kind,
            message: None,
            payload: None,
        }
    }

    pub(crate) fn with_message(mut self, msg: &str) -> Self {
        self.message = Some(msg.to_owned());
        self
    }

    /// Attach the `Debug` rendering of the discarded side.
    pub(crate) fn with_payload<P: fmt::Debug + ?Sized>(mut self, payload: &P) -> Self {
        self.payload = Some(format!("{payload:?}"));
        self
    }

    pub fn kind(&self) -> UnwrapErrorKind {
        self.kind
    }

    /// Caller-supplied message from `expect`/`expect_err`.
    pub fn message(&self) -> core::option::Option<&str> {
        self.message.as_deref()
    }

    /// `Debug` text of the value that was on the other side of a `Result`.
    pub fn payload(&self) -> core::option::Option<&str> {
        self.payload.as_deref()
    }
}

impl fmt::Display for UnwrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => f.write_str(msg)?,
            None => write!(f, "{}", self.kind)?,
        }
        if let Some(payload) = &self.payload {
            write!(f, ": {payload}")?;
        }
        Ok(())
    }
}

/// Log and raise an unwrap failure.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn fail(err: UnwrapError) -> ! {
    tracing::error!(kind = ?err.kind, "{err}");
    std::panic::panic_any(err)
}

/// A detached [`Handle`] that no longer names a live entry of the map it was
/// resolved against.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq, Error)]
pub enum StaleHandle {
    #[display("stale handle {handle:?}: the entry it named was removed")]
    Removed { handle: Handle },
    #[display("handle {handle:?} was issued by a different map")]
    WrongMap { handle: Handle },
}

impl StaleHandle {
    /// The handle that failed to resolve.
    pub fn handle(&self) -> Handle {
        match *self {
            StaleHandle::Removed { handle } | StaleHandle::WrongMap { handle } => handle,
        }
    }
}
