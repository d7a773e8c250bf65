use std::fmt::{Display, Formatter};

use log::debug;

use crate::compression::{compress, decompress};
use crate::error::Result;
use crate::huffman_coding::code_tables::{generate, DecodingTable, EncodingTable};
use crate::huffman_coding::huffman::HuffmanTree;
use crate::tools::freq_count::{freqs, FrequencyTable};

/// A huffman code derived from one corpus. The tables never change after construction, so a
/// codec can be shared between threads and used for any number of encode/decode calls.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    freqs: FrequencyTable,
    encoder: EncodingTable,
    decoder: DecodingTable,
}

impl HuffmanCodec {
    /// Count the corpus, build the tree and derive the code tables. The tree is dropped afterwards.
    pub fn new(corpus: &str) -> Self {
        let freqs = freqs(corpus);
        let (encoder, decoder) = generate(&HuffmanTree::build(&freqs));
        debug!(
            "Codec built from {} chars with {} distinct symbols",
            freqs.total(),
            freqs.len()
        );
        Self {
            freqs,
            encoder,
            decoder,
        }
    }

    /// Encode text made of corpus characters into a '0'/'1' digit string.
    pub fn encode(&self, text: &str) -> Result<String> {
        compress::encode(text, &self.encoder)
    }

    /// Decode a digit string produced by `encode`.
    pub fn decode(&self, bits: &str) -> Result<String> {
        decompress::decode(bits, &self.decoder)
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.freqs
    }

    pub fn encoding_table(&self) -> &EncodingTable {
        &self.encoder
    }

    pub fn decoding_table(&self) -> &DecodingTable {
        &self.decoder
    }

    /// Code assigned to `c`, if it occurred in the corpus.
    pub fn code_for(&self, c: char) -> Option<&str> {
        self.encoder.get(c)
    }

    /// Sum of frequency * code length over the corpus alphabet. This is the encoded length of the corpus.
    pub fn weighted_length(&self) -> u64 {
        self.freqs
            .iter()
            .filter_map(|(c, f)| self.encoder.get(c).map(|code| f as u64 * code.len() as u64))
            .sum()
    }

    /// Encode `text` and compare the result with its UTF-8 size.
    pub fn report(&self, text: &str) -> Result<Report> {
        let encoded = self.encode(text)?;
        Ok(Report {
            chars: text.chars().count(),
            raw_bits: text.len() * 8,
            encoded_bits: encoded.len(),
        })
    }
}

/// Size comparison between plain UTF-8 text and its encoded form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub chars: usize,
    pub raw_bits: usize,
    pub encoded_bits: usize,
}

impl Report {
    /// Encoded size as a fraction of the raw size. 0.0 for empty text.
    pub fn ratio(&self) -> f64 {
        if self.raw_bits == 0 {
            return 0.0;
        }
        self.encoded_bits as f64 / self.raw_bits as f64
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} chars: {} bits raw, {} bits encoded ({:.1}%)",
            self.chars,
            self.raw_bits,
            self.encoded_bits,
            self.ratio() * 100.0
        )
    }
}
