//! Properties of the insertion benchmark across all four containers.

#![allow(clippy::unwrap_used)]

use std::collections::{BTreeSet, HashSet, LinkedList};

use ctbench_core::{DATASET_SIZE, Dataset, InsertTarget, Position, time_insertion};
use proptest::prelude::*;

fn sorted<I: IntoIterator<Item = i32>>(values: I) -> Vec<i32> {
    let mut v: Vec<i32> = values.into_iter().collect();
    v.sort_unstable();
    v
}

#[test]
fn back_insertion_holds_dataset_as_multiset() {
    let dataset = Dataset::shuffled(DATASET_SIZE, Some(17)).unwrap();
    let expected = sorted(dataset.iter());

    let mut vector = Vec::new();
    let mut list = LinkedList::new();
    let mut set = BTreeSet::new();
    let mut unordered = HashSet::new();

    let _ = time_insertion(&dataset, &mut vector, Position::Back);
    let _ = time_insertion(&dataset, &mut list, Position::Back);
    let _ = time_insertion(&dataset, &mut set, Position::Back);
    let _ = time_insertion(&dataset, &mut unordered, Position::Back);

    assert_eq!(vector.as_slice(), dataset.as_slice());
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), dataset.as_slice());
    assert_eq!(set.into_iter().collect::<Vec<_>>(), expected);
    assert_eq!(sorted(unordered), expected);
}

#[test]
fn reused_container_is_cleared_before_refill() {
    let dataset = Dataset::shuffled(1_000, Some(5)).unwrap();
    let mut vector = Vec::new();

    let _ = time_insertion(&dataset, &mut vector, Position::Back);
    InsertTarget::clear(&mut vector);
    let _ = time_insertion(&dataset, &mut vector, Position::Front);

    assert_eq!(vector.len(), 1_000);
    assert_eq!(vector, dataset.iter().rev().collect::<Vec<_>>());
}

fn fill_twice<C>(dataset: &Dataset, position: Position) -> (C, C)
where
    C: InsertTarget + Default,
{
    let mut first = C::default();
    let mut second = C::default();
    let _ = time_insertion(dataset, &mut first, position);
    let _ = time_insertion(dataset, &mut second, position);
    (first, second)
}

fn position() -> impl Strategy<Value = Position> {
    prop_oneof![Just(Position::Front), Just(Position::Back)]
}

proptest! {
    /// Two independent insertions of the same dataset end in the same state.
    #[test]
    fn prop_insertion_is_idempotent(
        size in 1usize..400,
        seed in any::<u64>(),
        position in position(),
    ) {
        let dataset = Dataset::shuffled(size, Some(seed)).unwrap();

        let (a, b) = fill_twice::<Vec<i32>>(&dataset, position);
        prop_assert_eq!(a, b);

        let (a, b) = fill_twice::<LinkedList<i32>>(&dataset, position);
        prop_assert_eq!(a, b);

        let (a, b) = fill_twice::<BTreeSet<i32>>(&dataset, position);
        prop_assert_eq!(a, b);

        let (a, b) = fill_twice::<HashSet<i32>>(&dataset, position);
        prop_assert_eq!(a, b);
    }

    /// Front insertion into a sequence reverses the dataset order.
    #[test]
    fn prop_front_insertion_reverses(size in 1usize..400, seed in any::<u64>()) {
        let dataset = Dataset::shuffled(size, Some(seed)).unwrap();
        let reversed: Vec<i32> = dataset.iter().rev().collect();

        let mut vector = Vec::new();
        let mut list = LinkedList::new();
        let _ = time_insertion(&dataset, &mut vector, Position::Front);
        let _ = time_insertion(&dataset, &mut list, Position::Front);

        prop_assert_eq!(&vector, &reversed);
        prop_assert_eq!(list.into_iter().collect::<Vec<_>>(), reversed);
    }
}
