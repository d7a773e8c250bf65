//! The compression module turns text into binary digits and back using the tables from huffman_coding.
//!
//! - compress: look up each character's code and concatenate them.
//! - decompress: gather digits until they form a code, emit its character, repeat.
//!
//! The encoded form is a string of '0' and '1' characters, not packed bits.

pub mod compress;
pub mod decompress;
