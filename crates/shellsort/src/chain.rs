use std::collections::TryReserveError;
use std::fmt;
use std::iter::FusedIterator;

use crate::sequence::{gap_sequence, resolve_gaps};

const NIL: usize = usize::MAX;
const SENTINEL: usize = 0;

/// Stable handle to a node of a [`Chain`].
///
/// A node keeps its id for as long as it lives in the chain, no matter how
/// often it is relinked.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug)]
struct Node {
    value: i64,
    next: usize,
}

/// Singly linked chain of `i64` values.
///
/// Nodes live in an arena and point at each other by index. Slot 0 holds a
/// sentinel whose link is the head, so every real node has a predecessor.
#[derive(Clone)]
pub struct Chain {
    nodes: Vec<Node>,
    tail: usize,
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl Chain {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.push(Node {
            value: 0,
            next: NIL,
        });
        Self {
            nodes,
            tail: SENTINEL,
        }
    }

    /// Appends a new node holding `value` at the end of the chain.
    pub fn push_back(&mut self, value: i64) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node { value, next: NIL });
        self.nodes[self.tail].next = id;
        self.tail = id;
        NodeId(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn head(&self) -> Option<NodeId> {
        self.link(SENTINEL)
    }

    /// Value stored in `id`. Panics if `id` does not belong to this chain.
    #[inline]
    pub fn value(&self, id: NodeId) -> i64 {
        self.real_node(id).value
    }

    /// Successor of `id`. Panics if `id` does not belong to this chain.
    #[inline]
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        let _ = self.real_node(id);
        self.link(id.0)
    }

    /// Values in link order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            chain: self,
            cursor: self.nodes[SENTINEL].next,
            remaining: self.len(),
        }
    }

    /// Node ids in link order.
    pub fn node_ids(&self) -> NodeIds<'_> {
        NodeIds {
            chain: self,
            cursor: self.nodes[SENTINEL].next,
            remaining: self.len(),
        }
    }

    pub fn to_vec(&self) -> Vec<i64> {
        self.iter().collect()
    }

    #[inline]
    fn link(&self, idx: usize) -> Option<NodeId> {
        match self.nodes[idx].next {
            NIL => None,
            next => Some(NodeId(next)),
        }
    }

    #[inline]
    fn real_node(&self, id: NodeId) -> &Node {
        assert!(
            id.0 != SENTINEL && id.0 < self.nodes.len(),
            "node id {} out of range",
            id.0
        );
        &self.nodes[id.0]
    }

    /// Swaps `left` and `right` by relinking, in O(1).
    ///
    /// `pl` precedes `left` and `pr` precedes `right`; `pr == left` means the
    /// two are adjacent. The nodes strictly between them keep their order.
    #[inline]
    fn relink(&mut self, pl: usize, left: usize, pr: usize, right: usize) {
        let rn = self.nodes[right].next;
        if pr == left {
            self.nodes[pl].next = right;
            self.nodes[right].next = left;
            self.nodes[left].next = rn;
        } else {
            let ln = self.nodes[left].next;
            self.nodes[pl].next = right;
            self.nodes[right].next = ln;
            self.nodes[pr].next = left;
            self.nodes[left].next = rn;
        }
    }

    /// One bounded pass for `gap` over logical positions `gap..limit`.
    ///
    /// Returns the comparisons made and the position of the last swap.
    fn bounded_pass(&mut self, gap: usize, limit: usize) -> (u64, Option<usize>) {
        let mut pl = SENTINEL;
        let mut left = self.nodes[SENTINEL].next;
        let mut pr = NIL;
        let mut right = left;
        for _ in 0..gap {
            if right == NIL {
                return (0, None);
            }
            pr = right;
            right = self.nodes[right].next;
        }

        let mut comparisons = 0u64;
        let mut last_swap = None;
        let mut pos = gap;
        while right != NIL && pos < limit {
            comparisons += 1;
            if self.nodes[left].value > self.nodes[right].value {
                last_swap = Some(pos);
                let adjacent = pr == left;
                self.relink(pl, left, pr, right);
                if adjacent {
                    // right now sits before left; left stays the left cursor
                    pl = right;
                    pr = left;
                    right = self.nodes[left].next;
                } else {
                    pl = right;
                    pr = left;
                    left = self.nodes[pl].next;
                    right = self.nodes[pr].next;
                }
            } else {
                pl = left;
                left = self.nodes[left].next;
                pr = right;
                right = self.nodes[right].next;
            }
            pos += 1;
        }
        (comparisons, last_swap)
    }

    fn tail_after_relink(&self) -> usize {
        let mut cur = SENTINEL;
        while self.nodes[cur].next != NIL {
            cur = self.nodes[cur].next;
        }
        cur
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for Chain {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for Chain {}

impl FromIterator<i64> for Chain {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut chain = Self::with_capacity(iter.size_hint().0);
        for value in iter {
            chain.push_back(value);
        }
        chain
    }
}

impl From<Vec<i64>> for Chain {
    fn from(values: Vec<i64>) -> Self {
        values.into_iter().collect()
    }
}

impl From<&[i64]> for Chain {
    fn from(values: &[i64]) -> Self {
        values.iter().copied().collect()
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = i64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a> {
    chain: &'a Chain,
    cursor: usize,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<i64> {
        if self.cursor == NIL {
            return None;
        }
        let node = self.chain.nodes[self.cursor];
        self.cursor = node.next;
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

pub struct NodeIds<'a> {
    chain: &'a Chain,
    cursor: usize,
    remaining: usize,
}

impl Iterator for NodeIds<'_> {
    type Item = NodeId;

    #[inline]
    fn next(&mut self) -> Option<NodeId> {
        if self.cursor == NIL {
            return None;
        }
        let id = self.cursor;
        self.cursor = self.chain.nodes[id].next;
        self.remaining -= 1;
        Some(NodeId(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for NodeIds<'_> {}
impl FusedIterator for NodeIds<'_> {}

/// Sorts the chain ascending by relinking its nodes.
///
/// Consumes the chain and hands it back with its new head, together with the
/// number of comparisons performed.
pub fn shell_sort(chain: Chain) -> (Chain, u64) {
    shell_sort_with(chain, gap_sequence)
}

/// Like [`shell_sort`], but takes the gap sequence from `generator`.
pub fn shell_sort_with<G>(chain: Chain, generator: G) -> (Chain, u64)
where
    G: FnOnce(usize) -> Result<Vec<usize>, TryReserveError>,
{
    if chain.len() <= 1 {
        return (chain, 0);
    }
    let gaps = resolve_gaps(generator(chain.len()));
    shell_sort_with_gaps(chain, &gaps)
}

/// Runs one bounded round per gap, walking `gaps` from the back.
pub fn shell_sort_with_gaps(mut chain: Chain, gaps: &[usize]) -> (Chain, u64) {
    let len = chain.len();
    if len <= 1 {
        return (chain, 0);
    }

    let mut comparisons = 0u64;
    for &gap in gaps.iter().rev() {
        let mut limit = len;
        let mut passes = 0u32;
        let before = comparisons;
        loop {
            passes += 1;
            let (n_comp, last_swap) = chain.bounded_pass(gap, limit);
            comparisons += n_comp;
            match last_swap {
                Some(pos) => limit = pos,
                None => break,
            }
        }
        tracing::trace!(gap, passes, comparisons = comparisons - before, "chain round");
    }
    chain.tail = chain.tail_after_relink();

    tracing::debug!(len, gaps = gaps.len(), comparisons, "chain sorted");
    (chain, comparisons)
}
