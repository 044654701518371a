use std::{iter::Copied, slice, vec};

use super::*;

/// Ascending node ids returned by neighbourhood queries.
///
/// Queries answered by a single row borrow it ([`NodeIter::View`]); queries that
/// merge two rows own their result ([`NodeIter::Snapshot`]).
/// Either way the iterator is finite and can be restarted by cloning it beforehand.
#[derive(Debug, Clone)]
pub enum NodeIter<'a> {
    View(Copied<slice::Iter<'a, Node>>),
    Snapshot(vec::IntoIter<Node>),
}

impl NodeIter<'_> {
    /// An iterator without elements
    pub fn empty() -> Self {
        Self::Snapshot(Vec::new().into_iter())
    }
}

impl<'a> From<&'a [Node]> for NodeIter<'a> {
    fn from(value: &'a [Node]) -> Self {
        Self::View(value.iter().copied())
    }
}

impl From<Vec<Node>> for NodeIter<'_> {
    fn from(value: Vec<Node>) -> Self {
        Self::Snapshot(value.into_iter())
    }
}

impl Iterator for NodeIter<'_> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::View(iter) => iter.next(),
            Self::Snapshot(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::View(iter) => iter.size_hint(),
            Self::Snapshot(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for NodeIter<'_> {}

/// Ascending `(node, value)` pairs returned by weight and type queries.
///
/// Same split as [`NodeIter`]: single-row queries borrow, merged queries own.
#[derive(Debug, Clone)]
pub enum EntryIter<'a, V> {
    View(Entries<'a, V>),
    Snapshot(vec::IntoIter<(Node, V)>),
}

impl<V> EntryIter<'_, V> {
    /// An iterator without elements
    pub fn empty() -> Self {
        Self::Snapshot(Vec::new().into_iter())
    }
}

impl<'a, V> From<Entries<'a, V>> for EntryIter<'a, V> {
    fn from(value: Entries<'a, V>) -> Self {
        Self::View(value)
    }
}

impl<V> From<Vec<(Node, V)>> for EntryIter<'_, V> {
    fn from(value: Vec<(Node, V)>) -> Self {
        Self::Snapshot(value.into_iter())
    }
}

impl<V: Clone> Iterator for EntryIter<'_, V> {
    type Item = (Node, V);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::View(iter) => iter.next(),
            Self::Snapshot(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::View(iter) => iter.size_hint(),
            Self::Snapshot(iter) => iter.size_hint(),
        }
    }
}

impl<V: Clone> ExactSizeIterator for EntryIter<'_, V> {}
