//! Turns a finished huffman tree into the two lookup tables used by the encoder and decoder.
//!
//! Walking left appends a '0' to the code, walking right appends a '1'. Because only leaves carry
//! characters the resulting codes are prefix free.
//!
//! A tree made of a single leaf would give that character an empty code, which the decoder could
//! never match. That character is given the code "0" instead.

use log::{debug, trace};
use rustc_hash::FxHashMap;

use super::huffman::{HuffmanTree, NodeData};

/// Character to code lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodingTable {
    codes: FxHashMap<char, String>,
}

impl EncodingTable {
    pub fn get(&self, c: char) -> Option<&str> {
        self.codes.get(&c).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.codes.iter().map(|(&c, code)| (c, code.as_str()))
    }
}

/// Code to character lookup. The exact inverse of an EncodingTable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodingTable {
    symbols: FxHashMap<String, char>,
    max_code_len: usize,
}

impl DecodingTable {
    pub fn get(&self, code: &str) -> Option<char> {
        self.symbols.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, char)> + '_ {
        self.symbols.iter().map(|(code, &c)| (code.as_str(), c))
    }

    /// Length of the longest code, 0 for an empty table.
    pub fn max_code_len(&self) -> usize {
        self.max_code_len
    }
}

/// Walk the tree depth first and record the path to every leaf.
pub fn generate(tree: &HuffmanTree) -> (EncodingTable, DecodingTable) {
    let mut encoder = EncodingTable::default();
    let mut decoder = DecodingTable::default();

    let root = match tree.root() {
        Some(root) => root,
        None => return (encoder, decoder),
    };

    // A lone leaf sits at depth 0, so seed its path with a single digit.
    let mut stack = match tree.node(root).map(|n| n.node_data) {
        Some(NodeData::Leaf(_)) => vec![(root, String::from("0"))],
        _ => vec![(root, String::new())],
    };

    while let Some((idx, path)) = stack.pop() {
        match tree.node(idx).map(|n| n.node_data) {
            Some(NodeData::Kids(left, right)) => {
                let mut right_path = path.clone();
                right_path.push('1');
                let mut left_path = path;
                left_path.push('0');
                // Push right first so the left subtree is visited first.
                stack.push((right, right_path));
                stack.push((left, left_path));
            }
            Some(NodeData::Leaf(c)) => {
                trace!("{:?} -> {}", c, path);
                decoder.max_code_len = decoder.max_code_len.max(path.len());
                decoder.symbols.insert(path.clone(), c);
                encoder.codes.insert(c, path);
            }
            None => {}
        }
    }
    debug!(
        "Generated {} codes, longest is {} digits",
        encoder.len(),
        decoder.max_code_len
    );
    (encoder, decoder)
}
