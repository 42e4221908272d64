//! The four containers under test and the operations run against them.

use std::collections::{BTreeSet, HashSet, LinkedList};
use std::fmt;

/// Which container a measurement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// `Vec<i32>`, the baseline.
    Vector,
    /// `LinkedList<i32>`.
    List,
    /// `BTreeSet<i32>`.
    Set,
    /// `HashSet<i32>`.
    UnorderedSet,
}

impl ContainerKind {
    /// Every kind, in report order.
    pub const ALL: [Self; 4] = [Self::Vector, Self::List, Self::Set, Self::UnorderedSet];

    /// Label printed at the start of each report line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vector => "Vector",
            Self::List => "List",
            Self::Set => "Set",
            Self::UnorderedSet => "Unordered Set",
        }
    }

    /// Whether other kinds are reported relative to this one.
    #[must_use]
    pub const fn is_baseline(self) -> bool {
        matches!(self, Self::Vector)
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which end of a sequence an insertion targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Front,
    Back,
}

/// The operation a measurement timed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    InsertFront,
    InsertBack,
    Lookup,
}

impl Operation {
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InsertFront => "Inserting at the beginning",
            Self::InsertBack => "Inserting at the end",
            Self::Lookup => "Finding 1~10,000",
        }
    }
}

impl From<Position> for Operation {
    fn from(position: Position) -> Self {
        match position {
            Position::Front => Self::InsertFront,
            Position::Back => Self::InsertBack,
        }
    }
}

/// A container the insertion benchmark can fill one value at a time.
pub trait InsertTarget {
    /// Insert `value` at `position`.
    ///
    /// Sets have no ends; they ignore `position` and drop duplicates.
    fn insert_at(&mut self, position: Position, value: i32);

    /// Remove every value, keeping the container for reuse.
    fn clear(&mut self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A container with its own membership query, as opposed to a linear scan.
pub trait MembershipQuery {
    fn query(&self, key: i32) -> bool;
}

impl InsertTarget for Vec<i32> {
    fn insert_at(&mut self, position: Position, value: i32) {
        match position {
            Position::Front => self.insert(0, value),
            Position::Back => self.push(value),
        }
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn len(&self) -> usize {
        Self::len(self)
    }
}

impl InsertTarget for LinkedList<i32> {
    fn insert_at(&mut self, position: Position, value: i32) {
        match position {
            Position::Front => self.push_front(value),
            Position::Back => self.push_back(value),
        }
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn len(&self) -> usize {
        Self::len(self)
    }
}

impl InsertTarget for BTreeSet<i32> {
    fn insert_at(&mut self, _position: Position, value: i32) {
        self.insert(value);
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn len(&self) -> usize {
        Self::len(self)
    }
}

impl InsertTarget for HashSet<i32> {
    fn insert_at(&mut self, _position: Position, value: i32) {
        self.insert(value);
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn len(&self) -> usize {
        Self::len(self)
    }
}

impl MembershipQuery for BTreeSet<i32> {
    fn query(&self, key: i32) -> bool {
        self.contains(&key)
    }
}

impl MembershipQuery for HashSet<i32> {
    fn query(&self, key: i32) -> bool {
        self.contains(&key)
    }
}

/// One instance of each container kind, reused across every phase.
#[derive(Debug, Default, Clone)]
pub struct Containers {
    pub vector: Vec<i32>,
    pub list: LinkedList<i32>,
    pub set: BTreeSet<i32>,
    pub unordered_set: HashSet<i32>,
}

impl Containers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of values held by the container of `kind`.
    #[must_use]
    pub fn len_of(&self, kind: ContainerKind) -> usize {
        match kind {
            ContainerKind::Vector => self.vector.len(),
            ContainerKind::List => self.list.len(),
            ContainerKind::Set => self.set.len(),
            ContainerKind::UnorderedSet => self.unordered_set.len(),
        }
    }
}
