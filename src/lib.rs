//! entryway: `Option`/`Result` sum types with in-place mutators, and a hash
//! map whose mutation goes through an explicit entry protocol.
//!
//! Internal Design:
//!
//! Summary
//! - [`Option<T>`] and [`Result<T, E>`] are plain enums. Every combinator
//!   returns a fresh value except the in-place mutators of `Option`
//!   (`take`, `replace`, `insert`, `get_or_insert*`), which swap the variant
//!   of `self` with `mem::replace`.
//! - [`Ref<'a, T>`] is a settable reference to a slot owned by someone else
//!   (an `Option` payload, a map value). It wraps `&'a mut T`, so the slot
//!   cannot disappear while the `Ref` is alive.
//! - [`HashMap<K, V, S>`] hands out `Ref`s from `get_mut`, `iter_mut`,
//!   `values_mut`, `retain` and the [`Entry`] views.
//!
//! Layers
//! - `table`: structural map. A `hashbrown::HashTable` index of slot keys over
//!   a `slotmap::SlotMap` of `{ key, value, hash }`. Probing uses the stored
//!   hash, so `K: Hash` never runs while the index grows. A debug-only guard
//!   rejects reentry from `K: Eq`/`K: Hash` mid-probe.
//! - `entry`: occupied/vacant views that keep the probe result, so inserting
//!   or removing through a view does not search again.
//! - `hash_map`: public API, converting to the crate's `Option`/`Result`.
//!
//! References that outlive a borrow
//! - A [`Handle`] is a `Copy` name for one entry: a generational slot key
//!   plus the id of the issuing table. Resolving it after the entry was
//!   removed, or against another map, returns [`StaleHandle`]; it never
//!   aliases a later entry that reused the slot.
//!
//! Failure model
//! - Expected absence travels through `Option`/`Result` return values.
//! - `unwrap`/`expect`/`unwrap_err`/`expect_err` on the wrong variant are
//!   programmer errors: they log a `tracing` error event and panic with an
//!   [`UnwrapError`] payload that tests can downcast.
//!
//! Constraints
//! - Single-threaded: the map is `Send` but not `Sync`. Share it across
//!   threads behind a lock.
//! - Iteration order is arbitrary but stable while the map is not mutated.
//! - `Option` and `Result` are only partially ordered: payloads of the same
//!   variant compare, mixed variants do not.

mod entry;
mod error;
mod hash_map;
#[cfg(test)]
mod hash_map_proptest;
pub mod iter;
pub mod option;
mod reentrancy;
pub mod result;
#[cfg(feature = "serde")]
mod ser;
mod slot_ref;
mod table;

// Public surface
pub use entry::{Entry, OccupiedEntry, VacantEntry};
pub use error::{StaleHandle, UnwrapError, UnwrapErrorKind};
pub use hash_map::HashMap;
pub use option::Option;
pub use result::Result;
pub use slot_ref::Ref;
pub use table::Handle;
