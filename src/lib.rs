//! Huffman coding of text.
//!
//! Builds a prefix free binary code from the character frequencies of a corpus, then uses it to encode
//! text into a string of binary digits and decode it again.
//!
//! Basic usage:
//!
//! ```
//! use huffcode::HuffmanCodec;
//!
//! let codec = HuffmanCodec::new("huffman coding algorithm");
//! let encoded = codec.encode("coding").unwrap();
//! assert_eq!(codec.decode(&encoded).unwrap(), "coding");
//! ```
//!
pub mod codec;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use codec::{HuffmanCodec, Report};
pub use error::{HuffError, Result};
