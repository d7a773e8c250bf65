//! The huffman_coding module builds the code itself.
//!
//! - huffman: the tree, stored as an arena of nodes and built by repeatedly merging the two lightest nodes.
//! - code_tables: walks the tree and derives the character to code and code to character tables.
//!
//! Both steps run once when a codec is constructed. The tree is discarded once the tables exist.

pub mod code_tables;
pub mod huffman;
