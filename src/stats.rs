//! Size figures for a finished encoding, for display next to the bitstring.

use crate::huffman::{entropy_from_freq, FreqTable};

#[derive(Debug, Clone, PartialEq)]
pub struct CompressionStats {
    /// Symbols in the input text.
    pub symbols: u64,
    pub distinct: usize,
    pub encoded_bits: u64,
    /// Cost of the smallest fixed-width code that covers the alphabet.
    pub fixed_width_bits: u64,
    /// Cost of the text as UTF-8.
    pub raw_bits: u64,
    pub average_code_len: f64,
    pub entropy: f64,
}

impl CompressionStats {
    pub fn measure(text: &str, freqs: &FreqTable, encoded: &str) -> Self {
        let symbols = freqs.total();
        let distinct = freqs.len();
        let encoded_bits = encoded.len() as u64;
        let average_code_len = if symbols == 0 {
            0.0
        } else {
            encoded_bits as f64 / symbols as f64
        };

        Self {
            symbols,
            distinct,
            encoded_bits,
            fixed_width_bits: fixed_code_width(distinct) * symbols,
            raw_bits: text.len() as u64 * 8,
            average_code_len,
            entropy: entropy_from_freq(freqs),
        }
    }

    /// Encoded size over fixed-width size. Below 1.0 means the code won.
    pub fn fixed_width_ratio(&self) -> f64 {
        ratio(self.encoded_bits, self.fixed_width_bits)
    }

    pub fn raw_ratio(&self) -> f64 {
        ratio(self.encoded_bits, self.raw_bits)
    }

    /// Percentage saved against the UTF-8 text.
    pub fn space_saving(&self) -> f64 {
        if self.raw_bits == 0 {
            0.0
        } else {
            100.0 * (1.0 - self.raw_ratio())
        }
    }
}

fn fixed_code_width(distinct: usize) -> u64 {
    if distinct <= 1 {
        1
    } else {
        u64::from(usize::BITS - (distinct - 1).leading_zeros())
    }
}

fn ratio(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::Huffman;
    use test_case::test_case;

    #[test_case(1, 1)]
    #[test_case(2, 1)]
    #[test_case(3, 2)]
    #[test_case(4, 2)]
    #[test_case(5, 3)]
    #[test_case(256, 8)]
    #[test_case(257, 9)]
    fn fixed_width(distinct: usize, bits: u64) {
        assert_eq!(fixed_code_width(distinct), bits);
    }

    #[test]
    fn known_vector_beats_fixed_width() {
        let (huffman, bits) = Huffman::compress("aabbc").unwrap();
        let stats = CompressionStats::measure("aabbc", huffman.freqs(), &bits);

        assert_eq!(stats.symbols, 5);
        assert_eq!(stats.distinct, 3);
        assert_eq!(stats.encoded_bits, 8);
        assert_eq!(stats.fixed_width_bits, 10);
        assert_eq!(stats.raw_bits, 40);
        assert!(stats.fixed_width_ratio() < 1.0);
        assert!((stats.average_code_len - 1.6).abs() < 1e-12);
        assert!(stats.average_code_len >= stats.entropy);
        assert!((stats.space_saving() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn multibyte_text_counts_utf8_bytes() {
        let (huffman, bits) = Huffman::compress("é🦀").unwrap();
        let stats = CompressionStats::measure("é🦀", huffman.freqs(), &bits);
        assert_eq!(stats.symbols, 2);
        assert_eq!(stats.raw_bits, 6 * 8);
        assert_eq!(stats.encoded_bits, 2);
    }

    #[test]
    fn empty_measurement_does_not_divide_by_zero() {
        let stats = CompressionStats::measure("", &FreqTable::new(), "");
        assert_eq!(stats.average_code_len, 0.0);
        assert_eq!(stats.fixed_width_ratio(), 0.0);
        assert_eq!(stats.space_saving(), 0.0);
    }
}
