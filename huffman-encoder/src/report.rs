use itertools::Itertools;

use crate::{frequency::FrequencyTable, prefix_code_table::CodeMap};

const CONSTANT_BITS_PER_SYMBOL: usize = 5;

/// Bit counts behind the two compression ratios the tool reports: the input
/// rendered as unpadded binary ASCII, and a flat 5-bit-per-symbol baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionReport {
    pub encoded_bits: usize,
    pub ascii_bits: usize,
    pub constant_width_bits: usize,
}

impl CompressionReport {
    pub fn new(content: &str, encoded: &str) -> Self {
        let ascii_bits = content.chars().map(|ch| binary_ascii(ch).len()).sum();
        let constant_width_bits = CONSTANT_BITS_PER_SYMBOL * content.chars().count();

        CompressionReport {
            encoded_bits: encoded.len(),
            ascii_bits,
            constant_width_bits,
        }
    }

    pub fn ascii_ratio(&self) -> f64 {
        self.encoded_bits as f64 / self.ascii_bits as f64
    }

    pub fn constant_width_ratio(&self) -> f64 {
        self.encoded_bits as f64 / self.constant_width_bits as f64
    }
}

// the binary digits of the scalar value, no leading-zero padding
fn binary_ascii(ch: char) -> String {
    format!("{:b}", ch as u32)
}

pub fn print_report(content: &str, frequencies: &FrequencyTable, codes: &CodeMap, encoded: &str) {
    for (symbol, code) in codes.iter().sorted() {
        let frequency = frequencies.get(*symbol).unwrap_or_default();
        println!("symbol: {symbol:?} frequency: {frequency} code: {code}");
    }

    println!("\nString input:");
    println!("{content}");
    println!("\nString input (binary ASCII):");
    println!("{}", content.chars().map(binary_ascii).collect::<String>());
    println!("\nEncoded output (binary Huffman code):");
    println!("{encoded}");

    let report = CompressionReport::new(content, encoded);
    println!("\ncompression rate (ASCII): {}", report.ascii_ratio());
    println!(
        "compression rate (constant {CONSTANT_BITS_PER_SYMBOL}): {}",
        report.constant_width_ratio()
    );
}
