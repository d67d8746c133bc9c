// Option test suite.
//
// Invariants exercised:
// - Combinators never mutate their receiver; only take/replace/insert and
//   get_or_insert* change the variant in place.
// - Lazy arguments (closures) run only on the branch that needs them.
// - unwrap/expect on None panic with a typed UnwrapError payload.
// - Iteration yields at most one element and can be restarted.
use entryway::{Option, Result, UnwrapError, UnwrapErrorKind};
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

fn unwrap_payload<R>(f: impl FnOnce() -> R) -> UnwrapError {
    let err = panic::catch_unwind(AssertUnwindSafe(f)).err().expect("call should panic");
    err.downcast_ref::<UnwrapError>().cloned().expect("payload is UnwrapError")
}

// Test: the std bridge is lossless both ways.
#[test]
fn from_optional_round_trip() {
    let some: Option<i32> = Option::from_optional(Some(4));
    assert_eq!(some, Option::Some(4));
    assert_eq!(some.into_optional(), Some(4));
    let none: Option<i32> = None.into();
    assert_eq!(none, Option::None);
    assert_eq!(Option::<i32>::default(), Option::None);
}

// Test: unwrap on None is a programmer error.
// Verifies: the panic payload downcasts to UnwrapError with kind NoneValue.
#[test]
fn unwrap_none_panics_with_typed_payload() {
    let err = unwrap_payload(|| Option::<i32>::None.unwrap());
    assert_eq!(err.kind(), UnwrapErrorKind::NoneValue);
    assert_eq!(err.message(), None);
    assert_eq!(err.to_string(), "called `Option::unwrap()` on a `None` value");
}

#[test]
fn expect_none_carries_message() {
    let err = unwrap_payload(|| Option::<i32>::None.expect("config must be loaded"));
    assert_eq!(err.kind(), UnwrapErrorKind::NoneValue);
    assert_eq!(err.message(), Some("config must be loaded"));
    assert_eq!(err.to_string(), "config must be loaded");
    assert_eq!(Option::Some(3).expect("present"), 3);
}

// Test: defaults and fallbacks.
// Verifies: unwrap_or_else only evaluates its closure on None.
#[test]
fn fallbacks_are_lazy() {
    let calls = Cell::new(0);
    let f = || {
        calls.set(calls.get() + 1);
        7
    };
    assert_eq!(Option::Some(1).unwrap_or_else(f), 1);
    assert_eq!(calls.get(), 0);
    assert_eq!(Option::None.unwrap_or_else(f), 7);
    assert_eq!(calls.get(), 1);
    assert_eq!(Option::<String>::None.unwrap_or_default(), "");
    assert_eq!(Option::None.unwrap_or(2), 2);
}

#[test]
fn ok_or_converts_to_result() {
    assert_eq!(Option::Some(1).ok_or("missing"), Result::Ok(1));
    assert_eq!(Option::<i32>::None.ok_or("missing"), Result::Err("missing"));
    assert_eq!(Option::<i32>::None.ok_or_else(|| 9), Result::Err(9));
}

#[test]
fn and_then_or_else_chain() {
    let half = |x: i32| if x % 2 == 0 { Option::Some(x / 2) } else { Option::None };
    assert_eq!(Option::Some(8).and_then(half).and_then(half), Option::Some(2));
    assert_eq!(Option::Some(3).and_then(half), Option::None);
    assert_eq!(Option::None.or_else(|| Option::Some(5)), Option::Some(5));
    assert_eq!(Option::Some(1).or(Option::Some(5)), Option::Some(1));
    assert_eq!(Option::Some(4).filter(|x| *x > 5), Option::None);
    assert_eq!(Option::Some(1).zip(Option::Some("a")), Option::Some((1, "a")));
    assert_eq!(Option::Some(1).zip(Option::<&str>::None), Option::None);
}

// Test: take leaves None behind and hands back the old value.
#[test]
fn take_and_replace_mutate_in_place() {
    let mut slot = Option::Some(2);
    assert_eq!(slot.take(), Option::Some(2));
    assert_eq!(slot, Option::None);
    assert_eq!(slot.take(), Option::None);

    assert_eq!(slot.replace(5), Option::None);
    assert_eq!(slot.replace(6), Option::Some(5));
    assert_eq!(slot, Option::Some(6));
}

// Test: the Ref returned by get_or_insert writes back into the Option.
#[test]
fn get_or_insert_ref_writes_through() {
    let mut slot: Option<Vec<i32>> = Option::None;
    slot.get_or_insert_with(Vec::new).push(1);
    slot.get_or_insert(vec![99]).push(2);
    assert_eq!(slot, Option::Some(vec![1, 2]));

    let mut n: Option<u32> = Option::None;
    *n.get_or_insert_default() += 3;
    n.insert(10).set(11);
    assert_eq!(n, Option::Some(11));
}

// Test: iterating yields at most one item and can be done repeatedly.
#[test]
fn iter_is_restartable() {
    let mut v = Option::Some(3);
    assert_eq!(v.iter().count(), 1);
    assert_eq!(v.iter().len(), 1);
    assert_eq!(v.iter().copied().sum::<i32>(), 3);
    for x in v.iter_mut() {
        *x += 1;
    }
    assert_eq!((&v).into_iter().next(), Some(&4));
    assert_eq!(v.into_iter().collect::<Vec<_>>(), vec![4]);
    assert_eq!(Option::<i32>::None.iter().next(), None);
}

#[test]
fn flatten_and_transpose() {
    assert_eq!(Option::Some(Option::Some(1)).flatten(), Option::Some(1));
    assert_eq!(Option::Some(Option::<i32>::None).flatten(), Option::None);

    let x: Option<Result<i32, &str>> = Option::Some(Result::Ok(5));
    assert_eq!(x.transpose(), Result::Ok(Option::Some(5)));
    let y: Option<Result<i32, &str>> = Option::Some(Result::Err("bad"));
    assert_eq!(y.transpose(), Result::Err("bad"));
    let z: Option<Result<i32, &str>> = Option::None;
    assert_eq!(z.transpose(), Result::Ok(Option::None));
}

// Test: payloads of the same variant compare; mixed variants do not.
#[test]
fn ordering_is_partial_across_variants() {
    use std::cmp::Ordering;
    assert_eq!(Option::Some(1).partial_cmp(&Option::Some(2)), Some(Ordering::Less));
    assert_eq!(Option::<i32>::None.partial_cmp(&Option::None), Some(Ordering::Equal));
    assert_eq!(Option::Some(1).partial_cmp(&Option::None), None);
    assert!(!(Option::Some(1) < Option::None));
    assert!(!(Option::None < Option::Some(1)));
}

#[test]
fn debug_renders_variant() {
    assert_eq!(format!("{:?}", Option::Some(1)), "Some(1)");
    assert_eq!(format!("{:?}", Option::<i32>::None), "None");
}
