//! Insertion benchmark.

use crate::container::{InsertTarget, Position};
use crate::dataset::Dataset;
use crate::timer::{Millis, time_millis};

/// Insert every dataset value, one at a time and in dataset order, at
/// `position` of `target`, timing the whole loop.
///
/// `target` is expected to be empty. Afterwards it holds the whole dataset:
/// front insertion into a sequence reverses the dataset order, back
/// insertion preserves it.
///
/// # Examples
///
/// ```
/// use ctbench_core::{Dataset, Position, time_insertion};
///
/// let dataset = Dataset::shuffled(100, Some(9)).unwrap();
/// let mut list = std::collections::LinkedList::new();
/// let _elapsed = time_insertion(&dataset, &mut list, Position::Front);
/// assert_eq!(list.len(), 100);
/// ```
pub fn time_insertion<C>(dataset: &Dataset, target: &mut C, position: Position) -> Millis
where
    C: InsertTarget,
{
    time_millis(|| fill(dataset.as_slice(), target, position))
}

fn fill<C>(values: &[i32], target: &mut C, position: Position)
where
    C: InsertTarget,
{
    for &value in values {
        target.insert_at(position, value);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::collections::{BTreeSet, HashSet, LinkedList};

    fn dataset() -> Dataset {
        Dataset::shuffled(1_000, Some(11)).unwrap()
    }

    #[test]
    fn test_back_preserves_order_vec() {
        let dataset = dataset();
        let mut v = Vec::new();
        let _ = time_insertion(&dataset, &mut v, Position::Back);
        assert_eq!(v.as_slice(), dataset.as_slice());
    }

    #[test]
    fn test_front_reverses_order_vec() {
        let dataset = dataset();
        let mut v = Vec::new();
        let _ = time_insertion(&dataset, &mut v, Position::Front);
        let reversed: Vec<i32> = dataset.iter().rev().collect();
        assert_eq!(v, reversed);
    }

    #[test]
    fn test_front_reverses_order_list() {
        let dataset = dataset();
        let mut l = LinkedList::new();
        let _ = time_insertion(&dataset, &mut l, Position::Front);
        let got: Vec<i32> = l.into_iter().collect();
        let reversed: Vec<i32> = dataset.iter().rev().collect();
        assert_eq!(got, reversed);
    }

    #[test]
    fn test_sets_hold_every_value() {
        let dataset = dataset();
        let mut s = BTreeSet::new();
        let mut h = HashSet::new();
        let _ = time_insertion(&dataset, &mut s, Position::Front);
        let _ = time_insertion(&dataset, &mut h, Position::Back);

        let expected: Vec<i32> = (1..=1_000).collect();
        assert_eq!(s.into_iter().collect::<Vec<_>>(), expected);
        assert_eq!(h.len(), 1_000);
        assert!(dataset.iter().all(|value| h.contains(&value)));
    }
}
