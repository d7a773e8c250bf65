use log::{debug, trace};

use crate::tools::freq_count::FrequencyTable;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Payload of a tree node. Internal nodes always own exactly two children (arena indices).
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum NodeData {
    Kids(usize, usize),
    Leaf(char),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    /// Frequency for leaves, summed frequency of the subtree for internal nodes.
    pub weight: u32,
    /// Creation sequence number, used to break weight ties.
    pub seq: u32,
    pub node_data: NodeData,
}
impl Node {
    /// Create a new node
    pub fn new(weight: u32, seq: u32, node_data: NodeData) -> Node {
        Node {
            weight,
            seq,
            node_data,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }
}

/// Entry in the priority queue. Points at a node in the arena.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
struct Pending {
    weight: u32,
    seq: u32,
    idx: usize,
}
impl Ord for Pending {
    /// Reverse ordering on (weight, seq) so the max-heap pops the lightest, oldest node first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Huffman tree stored as a flat arena of nodes. `root` is None only for an empty frequency table.
#[derive(Debug, Clone, Default)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl HuffmanTree {
    /// Build the tree by greedily merging the two lightest nodes until one is left.
    ///
    /// Leaves get sequence numbers 0..n in ascending character order and each new internal node
    /// takes the next number, so among equal weights the node created first is merged first.
    /// The first node taken off the queue becomes the left child, the second the right child.
    pub fn build(freqs: &FrequencyTable) -> HuffmanTree {
        let leaves = freqs.sorted();
        let mut nodes: Vec<Node> = Vec::with_capacity(leaves.len().max(1) * 2 - 1);
        let mut queue = BinaryHeap::with_capacity(leaves.len());

        for (seq, (c, f)) in leaves.into_iter().enumerate() {
            let node = Node::new(f, seq as u32, NodeData::Leaf(c));
            queue.push(Pending {
                weight: node.weight,
                seq: node.seq,
                idx: nodes.len(),
            });
            nodes.push(node);
        }
        debug!("Building huffman tree from {} leaves", nodes.len());

        let mut next_seq = nodes.len() as u32;
        // Pare the queue down to a single node.
        while queue.len() > 1 {
            let (left, right) = match (queue.pop(), queue.pop()) {
                (Some(l), Some(r)) => (l, r),
                _ => break,
            };
            trace!(
                "Merging node {} (weight {}) with node {} (weight {})",
                left.idx,
                left.weight,
                right.idx,
                right.weight
            );
            let node = Node::new(
                left.weight.saturating_add(right.weight),
                next_seq,
                NodeData::Kids(left.idx, right.idx),
            );
            next_seq += 1;
            queue.push(Pending {
                weight: node.weight,
                seq: node.seq,
                idx: nodes.len(),
            });
            nodes.push(node);
        }

        let root = queue.pop().map(|p| p.idx);
        HuffmanTree { nodes, root }
    }

    /// Index of the root node.
    pub fn root(&self) -> Option<usize> {
        self.root
    }

    pub fn node(&self, idx: usize) -> Option<&Node> {
        self.nodes.get(idx)
    }

    /// Total number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// True when every internal node carries the summed weight of its two children.
    /// With n leaves a full binary tree has exactly 2n - 1 nodes.
    pub fn is_full(&self) -> bool {
        let leaves = self.leaf_count();
        if leaves == 0 {
            return self.nodes.is_empty();
        }
        self.nodes.len() == 2 * leaves - 1
            && self.nodes.iter().all(|n| match n.node_data {
                NodeData::Leaf(_) => true,
                NodeData::Kids(l, r) => match (self.nodes.get(l), self.nodes.get(r)) {
                    (Some(a), Some(b)) => a.weight.saturating_add(b.weight) == n.weight,
                    _ => false,
                },
            })
    }
}

#[cfg(test)]
mod test {
    use super::{HuffmanTree, NodeData};
    use crate::tools::freq_count::freqs;

    #[test]
    fn empty_tree_test() {
        let tree = HuffmanTree::build(&freqs(""));
        assert_eq!(tree.root(), None);
        assert!(tree.is_empty());
        assert!(tree.is_full());
    }

    #[test]
    fn single_leaf_test() {
        let tree = HuffmanTree::build(&freqs("aaaa"));
        let root = tree.node(tree.root().unwrap()).unwrap();
        assert_eq!(root.node_data, NodeData::Leaf('a'));
        assert_eq!(root.weight, 4);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn full_tree_test() {
        let tree = HuffmanTree::build(&freqs("huffman coding algorithm"));
        assert_eq!(tree.leaf_count(), 15);
        assert!(tree.is_full());
        let root = tree.node(tree.root().unwrap()).unwrap();
        assert_eq!(root.weight, 24);
    }

    #[test]
    fn tie_break_test() {
        // All weights equal: 'a' and 'b' merge first, then 'c' and 'd', then the two pairs.
        let tree = HuffmanTree::build(&freqs("dcba"));
        assert_eq!(tree.node(4).unwrap().node_data, NodeData::Kids(0, 1));
        assert_eq!(tree.node(5).unwrap().node_data, NodeData::Kids(2, 3));
        assert_eq!(tree.node(6).unwrap().node_data, NodeData::Kids(4, 5));
        assert_eq!(tree.root(), Some(6));
    }

    #[test]
    fn lighter_node_goes_left_test() {
        // 'b' (1) and 'c' (1) merge into weight 2, which ties 'a' (2) but is newer, so 'a' goes left.
        let tree = HuffmanTree::build(&freqs("aabc"));
        assert_eq!(tree.node(3).unwrap().node_data, NodeData::Kids(1, 2));
        assert_eq!(tree.node(4).unwrap().node_data, NodeData::Kids(0, 3));
    }
}
