//! Debug-only probe guard.
//!
//! The slot table calls user code (`K: Eq`, `K: Hash`) while it probes. A
//! key whose `Eq` reaches back into the same table through a raw pointer would
//! observe a half-finished probe. In debug builds a nested entry panics; in
//! release builds the guard is a no-op.

use core::cell::Cell;
use core::marker::PhantomData;

#[derive(Debug)]
pub(crate) struct ProbeGuard {
    #[cfg(debug_assertions)]
    active: Cell<bool>,
    // !Sync in every build profile, not only when `active` exists.
    _nosync: PhantomData<Cell<()>>,
}

impl ProbeGuard {
    pub(crate) const fn new() -> Self {
        Self {
            #[cfg(debug_assertions)]
            active: Cell::new(false),
            _nosync: PhantomData,
        }
    }

    /// Mark the start of a probing section. The returned token ends it on drop.
    #[inline]
    pub(crate) fn enter(&self) -> Probing<'_> {
        #[cfg(debug_assertions)]
        {
            assert!(
                !self.active.replace(true),
                "reentrant access to a map while it was probing for a key"
            );
            Probing { owner: self }
        }

        #[cfg(not(debug_assertions))]
        {
            Probing { _owner: PhantomData }
        }
    }
}

impl Default for ProbeGuard {
    fn default() -> Self {
        Self::new()
    }
}

// A cloned table starts outside any probe.
impl Clone for ProbeGuard {
    fn clone(&self) -> Self {
        Self::new()
    }
}

pub(crate) struct Probing<'a> {
    #[cfg(debug_assertions)]
    owner: &'a ProbeGuard,
    #[cfg(not(debug_assertions))]
    _owner: PhantomData<&'a ()>,
}

impl<'a> Drop for Probing<'a> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        self.owner.active.set(false);
    }
}
