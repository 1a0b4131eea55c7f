//! Huffman coding for teaching: frequency analysis, greedy tree construction,
//! code assignment, and encoding to a readable string of `'0'`/`'1'`
//! characters. Also carries the backtracking N-Queens solver used by the
//! same visualizer.
//!
//! ```
//! use huffman_visualizer::{analyze, build_code_table, build_huffman_tree, decode, encode};
//!
//! let freqs = analyze("aabbc");
//! let tree = build_huffman_tree(&freqs)?;
//! let codes = build_code_table(&tree);
//! let bits = encode("aabbc", &codes)?;
//! assert_eq!(bits, "11110010");
//! assert_eq!(decode(&bits, &tree)?, "aabbc");
//! # Ok::<(), huffman_visualizer::Error>(())
//! ```

pub mod cli;
pub mod container;
pub mod error;
pub mod huffman;
pub mod nqueens;
pub mod render;
pub mod stats;

pub use error::{Error, MalformedEncoding, Result};
pub use huffman::{
    analyze, build_code_table, build_huffman_tree, code_entries, decode, encode,
    entropy_from_freq, CodeEntry, CodeTable, FreqTable, Huffman, HuffmanTree, Node,
};
