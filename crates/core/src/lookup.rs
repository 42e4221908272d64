//! Lookup benchmarks.
//!
//! Sequences are searched with a linear scan, sets with their own membership
//! query. Both variants issue the same queries in the same order so their
//! timings compare directly.

use std::hint::black_box;
use std::ops::RangeInclusive;

use crate::container::MembershipQuery;
use crate::timer::{Millis, time_millis};

/// Keys looked up by every lookup benchmark, in ascending order.
pub const LOOKUP_KEYS: RangeInclusive<i32> = 1..=10_000;

/// Time a linear find-first-match scan for each lookup key.
///
/// # Examples
///
/// ```
/// use ctbench_core::time_linear_lookup;
///
/// let v: Vec<i32> = (1..=100).rev().collect();
/// let _elapsed = time_linear_lookup(&v);
/// ```
pub fn time_linear_lookup<C>(container: &C) -> Millis
where
    for<'a> &'a C: IntoIterator<Item = &'a i32>,
{
    time_millis(|| {
        for_each_key(|key| {
            black_box(container.into_iter().find(|&&value| value == key));
        });
    })
}

/// Time the container's own membership query for each lookup key.
pub fn time_native_lookup<C>(container: &C) -> Millis
where
    C: MembershipQuery,
{
    time_millis(|| {
        for_each_key(|key| {
            black_box(container.query(key));
        });
    })
}

fn for_each_key<F>(mut query: F)
where
    F: FnMut(i32),
{
    for key in LOOKUP_KEYS {
        query(key);
    }
}
