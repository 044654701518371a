/*!
Merging of the incoming and outgoing rows of a node.

All inputs are strictly ascending in their node ids, so every output is strictly
ascending as well. Results are materialized since they outlive neither row.
*/

use itertools::{Either, EitherOrBoth, Itertools};

use super::*;

/// Tag breaking ties between the two rows: incoming entries come first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Side {
    In,
    Out,
}

/// Sorted union of two ascending id rows without duplicates
pub(crate) fn union_nodes(incoming: &[Node], outgoing: &[Node]) -> Vec<Node> {
    [incoming, outgoing]
        .into_iter()
        .kmerge()
        .dedup()
        .copied()
        .collect_vec()
}

/// Sorted intersection of two ascending id rows
pub(crate) fn intersect_nodes(incoming: &[Node], outgoing: &[Node]) -> Vec<Node> {
    incoming
        .iter()
        .merge_join_by(outgoing, |a, b| a.cmp(b))
        .filter_map(|e| match e {
            EitherOrBoth::Both(&u, _) => Some(u),
            _ => None,
        })
        .collect_vec()
}

/// Size of the sorted intersection of two ascending id rows
pub(crate) fn count_common(incoming: &[Node], outgoing: &[Node]) -> usize {
    incoming
        .iter()
        .merge_join_by(outgoing, |a, b| a.cmp(b))
        .filter(EitherOrBoth::is_both)
        .count()
}

/// Sorted union of two ascending entry streams.
///
/// A node present in both streams is emitted once with value
/// `combine(incoming, outgoing)`.
pub(crate) fn union_entries<V, I, O, F>(incoming: I, outgoing: O, mut combine: F) -> Vec<(Node, V)>
where
    I: Iterator<Item = (Node, V)>,
    O: Iterator<Item = (Node, V)>,
    F: FnMut(V, V) -> V,
{
    let incoming = incoming.map(|(u, value)| (u, Side::In, value));
    let outgoing = outgoing.map(|(u, value)| (u, Side::Out, value));

    [Either::Left(incoming), Either::Right(outgoing)]
        .into_iter()
        .kmerge_by(|a, b| (a.0, a.1) < (b.0, b.1))
        .coalesce(|a, b| {
            if a.0 == b.0 {
                Ok((a.0, Side::Out, combine(a.2, b.2)))
            } else {
                Err((a, b))
            }
        })
        .map(|(u, _, value)| (u, value))
        .collect_vec()
}

/// Sorted intersection of two ascending entry streams with values
/// `combine(incoming, outgoing)`
pub(crate) fn intersect_entries<V, I, O, F>(
    incoming: I,
    outgoing: O,
    mut combine: F,
) -> Vec<(Node, V)>
where
    I: Iterator<Item = (Node, V)>,
    O: Iterator<Item = (Node, V)>,
    F: FnMut(V, V) -> V,
{
    incoming
        .merge_join_by(outgoing, |a, b| a.0.cmp(&b.0))
        .filter_map(|e| match e {
            EitherOrBoth::Both((u, a), (_, b)) => Some((u, combine(a, b))),
            _ => None,
        })
        .collect_vec()
}
