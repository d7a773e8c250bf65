use log::trace;

use crate::error::{HuffError, Result};
use crate::huffman_coding::code_tables::EncodingTable;

/// Encode `text` by concatenating the code of every character in order.
/// Fails on the first character that has no code.
pub fn encode(text: &str, table: &EncodingTable) -> Result<String> {
    let mut out = String::with_capacity(text.len() * 4);
    for (position, symbol) in text.chars().enumerate() {
        match table.get(symbol) {
            Some(code) => out.push_str(code),
            None => return Err(HuffError::UnknownSymbol { symbol, position }),
        }
    }
    trace!("Encoded {} chars into {} digits", text.chars().count(), out.len());
    Ok(out)
}
