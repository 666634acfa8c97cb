use super::FrequencyTable;
use alloc::boxed::Box;
use alloc::collections::BinaryHeap;
use core::cmp::{Ordering, Reverse};

/// A node of a Huffman tree.
///
/// Internal nodes always own exactly two children. The weight of an internal node is the
/// sum of its children's weights. Trees parsed back from a compressed stream don't carry
/// weights, all their nodes have weight 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: u8,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn leaf(symbol: u8, weight: u64) -> Node {
        Node::Leaf { symbol, weight }
    }

    pub fn internal(left: Node, right: Node) -> Node {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    /// The child reached by following `bit` (0 = left, 1 = right). Leaves have no children.
    pub fn child(&self, bit: u8) -> Option<&Node> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, .. } if bit == 0 => Some(left.as_ref()),
            Node::Internal { right, .. } => Some(right.as_ref()),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Length of the longest root to leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Compares shape and symbols, ignoring weights.
    pub fn same_shape(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Leaf { symbol: a, .. }, Node::Leaf { symbol: b, .. }) => a == b,
            (
                Node::Internal {
                    left: l1,
                    right: r1,
                    ..
                },
                Node::Internal {
                    left: l2,
                    right: r2,
                    ..
                },
            ) => l1.same_shape(l2) && r1.same_shape(r2),
            _ => false,
        }
    }
}

/// A node waiting in the merge queue.
///
/// Ordered by weight first, then by rank. Leaves are ranked 0, 1, 2, ... in the order of
/// [FrequencyTable::sorted_entries]. Every merged node gets a rank below all ranks handed
/// out before it, so it is taken ahead of every queued node of the same weight.
struct QueueEntry {
    weight: u64,
    rank: i64,
    node: Node,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.weight.cmp(&other.weight) {
            Ordering::Equal => self.rank.cmp(&other.rank),
            other => other,
        }
    }
}

/// Build a Huffman tree from symbol frequencies.
///
/// The two lowest ranked nodes `a` (lowest) and `b` are repeatedly replaced by a node
/// with `b` on the left and `a` on the right, until only the root is left.
/// With a single distinct symbol the tree is just that leaf.
///
/// Returns `None` if no symbol has a count above zero.
pub fn build_tree(frequencies: &FrequencyTable) -> Option<Node> {
    let entries = frequencies.sorted_entries();
    let mut queue = BinaryHeap::with_capacity(entries.len());
    for (rank, entry) in entries.into_iter().enumerate() {
        queue.push(Reverse(QueueEntry {
            weight: entry.count,
            rank: rank as i64,
            node: Node::leaf(entry.symbol, entry.count),
        }));
    }

    let mut next_merged_rank = -1;
    while queue.len() > 1 {
        let Reverse(lowest) = queue.pop()?;
        let Reverse(second) = queue.pop()?;
        let merged = Node::internal(second.node, lowest.node);
        queue.push(Reverse(QueueEntry {
            weight: merged.weight(),
            rank: next_merged_rank,
            node: merged,
        }));
        next_merged_rank -= 1;
    }

    queue.pop().map(|Reverse(entry)| entry.node)
}

#[cfg(test)]
mod tests {
    use super::{build_tree, Node};
    use crate::huff0::FrequencyTable;
    use crate::tests::reference_tree;

    fn table(counts: &[(u8, usize)]) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for &(symbol, count) in counts {
            for _ in 0..count {
                table.add(symbol);
            }
        }
        table
    }

    #[test]
    fn reference_frequencies() {
        let freqs = table(&[(b'A', 6), (b'B', 1), (b'C', 6), (b'D', 2), (b'E', 5)]);
        let tree = build_tree(&freqs).unwrap();
        assert_eq!(tree, reference_tree());
        assert_eq!(tree.weight(), 20);
        assert_eq!(tree.leaf_count(), 5);
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn merged_node_taken_before_equal_leaf() {
        // C(1) + B(2) makes a node of weight 3, which must be merged before the leaf A(3)
        let tree = build_tree(&FrequencyTable::from_data(b"AAABBC")).unwrap();
        let expected = Node::internal(
            Node::leaf(b'A', 3),
            Node::internal(Node::leaf(b'B', 2), Node::leaf(b'C', 1)),
        );
        assert_eq!(tree, expected);
    }

    #[test]
    fn equal_weights_use_symbol_order() {
        let tree = build_tree(&FrequencyTable::from_data(b"ABABABAB")).unwrap();
        let expected = Node::internal(Node::leaf(b'B', 4), Node::leaf(b'A', 4));
        assert_eq!(tree, expected);
    }

    #[test]
    fn single_symbol() {
        let tree = build_tree(&FrequencyTable::from_data(b"XXXXXX")).unwrap();
        assert_eq!(tree, Node::leaf(b'X', 6));
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn no_symbols() {
        assert!(build_tree(&FrequencyTable::new()).is_none());
    }

    #[test]
    fn weights_add_up() {
        let data: std::vec::Vec<u8> = (0..2000u32).map(|i| (i * i % 251) as u8).collect();
        let freqs = FrequencyTable::from_data(&data);
        let tree = build_tree(&freqs).unwrap();
        assert_eq!(tree.weight(), 2000);
        assert_eq!(tree.leaf_count(), freqs.distinct_symbols());
    }

    #[test]
    fn shape_ignores_weights() {
        let weighted = reference_tree();
        let unweighted = Node::internal(
            Node::internal(Node::leaf(b'C', 0), Node::leaf(b'A', 0)),
            Node::internal(
                Node::leaf(b'E', 0),
                Node::internal(Node::leaf(b'D', 0), Node::leaf(b'B', 0)),
            ),
        );
        assert!(weighted.same_shape(&unweighted));
        assert_ne!(weighted, unweighted);
        assert!(!weighted.same_shape(&Node::leaf(b'C', 0)));
    }
}
