use log::trace;

use crate::error::{HuffError, Result};
use crate::huffman_coding::code_tables::DecodingTable;

/// Where the decoder stands between digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeState {
    /// Nothing buffered, the next digit starts a new code.
    Empty,
    /// Some digits have been read that do not yet form a code.
    Accumulating,
}

/// Decode a string of '0'/'1' digits back into text.
///
/// Digits are gathered until the buffer exactly matches a code. Since the codes are prefix free the
/// first match is the only possible one, so no backtracking is needed. The input must end in the
/// Empty state.
pub fn decode(bits: &str, table: &DecodingTable) -> Result<String> {
    let mut out = String::with_capacity(bits.len() / 2);
    let mut key = String::with_capacity(table.max_code_len());
    let mut state = DecodeState::Empty;
    // Offset of the first digit in `key`
    let mut start = 0;

    for (position, digit) in bits.chars().enumerate() {
        if digit != '0' && digit != '1' {
            return Err(HuffError::InvalidDigit { digit, position });
        }
        if state == DecodeState::Empty {
            start = position;
            state = DecodeState::Accumulating;
        }
        key.push(digit);

        if let Some(c) = table.get(&key) {
            out.push(c);
            key.clear();
            state = DecodeState::Empty;
        } else if key.len() >= table.max_code_len() {
            // No longer code exists, so this buffer can never be completed.
            return Err(HuffError::IncompleteCode {
                position: start,
                pending: key,
            });
        }
    }

    match state {
        DecodeState::Empty => {
            trace!("Decoded {} digits into {} chars", bits.len(), out.chars().count());
            Ok(out)
        }
        DecodeState::Accumulating => Err(HuffError::IncompleteCode {
            position: start,
            pending: key,
        }),
    }
}

#[cfg(test)]
mod test {
    use super::decode;
    use crate::error::HuffError;
    use crate::huffman_coding::code_tables::generate;
    use crate::huffman_coding::huffman::HuffmanTree;
    use crate::tools::freq_count::freqs;

    fn table(corpus: &str) -> crate::huffman_coding::code_tables::DecodingTable {
        generate(&HuffmanTree::build(&freqs(corpus))).1
    }

    #[test]
    fn decode_test() {
        // a:0 b:10 c:11
        let dec = table("aabc");
        assert_eq!(decode("010110", &dec).unwrap(), "abca");
        assert_eq!(decode("", &dec).unwrap(), "");
    }

    #[test]
    fn truncated_test() {
        let dec = table("aabc");
        assert_eq!(
            decode("01011", &dec).unwrap(),
            "abc",
        );
        assert_eq!(
            decode("0101", &dec),
            Err(HuffError::IncompleteCode {
                position: 3,
                pending: "1".to_string()
            })
        );
    }

    #[test]
    fn invalid_digit_test() {
        let dec = table("aabc");
        assert_eq!(
            decode("0120", &dec),
            Err(HuffError::InvalidDigit {
                digit: '2',
                position: 2
            })
        );
    }

    #[test]
    fn single_code_test() {
        let dec = table("aaaa");
        assert_eq!(decode("000", &dec).unwrap(), "aaa");
        assert_eq!(
            decode("01", &dec),
            Err(HuffError::IncompleteCode {
                position: 1,
                pending: "1".to_string()
            })
        );
    }

    #[test]
    fn empty_table_test() {
        let dec = table("");
        assert_eq!(decode("", &dec).unwrap(), "");
        assert_eq!(
            decode("0", &dec),
            Err(HuffError::IncompleteCode {
                position: 0,
                pending: "0".to_string()
            })
        );
    }
}
