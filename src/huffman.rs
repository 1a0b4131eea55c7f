use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use log::{debug, trace};

use crate::error::{Error, MalformedEncoding, Result};

/// Occurrence count per symbol, in the order symbols were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreqTable {
    entries: Vec<(char, u64)>,
    index: HashMap<char, usize>,
}

impl FreqTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a table from stored `(symbol, count)` pairs, keeping their order.
    pub fn from_counts<I>(counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, u64)>,
    {
        let mut table = Self::new();
        for (symbol, count) in counts {
            if count == 0 {
                return Err(Error::InvalidTable(format!(
                    "symbol {symbol:?} has a zero count"
                )));
            }
            if table.index.contains_key(&symbol) {
                return Err(Error::InvalidTable(format!(
                    "symbol {symbol:?} appears more than once"
                )));
            }
            table.index.insert(symbol, table.entries.len());
            table.entries.push((symbol, count));
        }
        Ok(table)
    }

    fn add(&mut self, symbol: char) {
        match self.index.get(&symbol) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(symbol, self.entries.len());
                self.entries.push((symbol, 1));
            }
        }
    }

    /// Count for `symbol`, or 0 when it never occurred.
    pub fn get(&self, symbol: char) -> u64 {
        self.index.get(&symbol).map_or(0, |&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of symbols in the analyzed text.
    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, &(_, count)| acc.saturating_add(count))
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.entries.iter().copied()
    }
}

/// Counts every code point of `text`. No normalization is applied.
pub fn analyze(text: &str) -> FreqTable {
    let mut table = FreqTable::new();
    for symbol in text.chars() {
        table.add(symbol);
    }
    debug!(
        "Analyzed {} symbols, {} distinct",
        table.total(),
        table.len()
    );
    table
}

/// Symbol to bitstring, in tree traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    entries: Vec<(char, String)>,
    index: HashMap<char, usize>,
}

impl CodeTable {
    fn insert(&mut self, symbol: char, code: String) {
        match self.index.get(&symbol) {
            Some(&i) => self.entries[i].1 = code,
            None => {
                self.index.insert(symbol, self.entries.len());
                self.entries.push((symbol, code));
            }
        }
    }

    pub fn get(&self, symbol: char) -> Option<&str> {
        self.index.get(&symbol).map(|&i| self.entries[i].1.as_str())
    }

    /// `(symbol, code)` pairs in the table's iteration order.
    pub fn pairs(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.entries
            .iter()
            .map(|(symbol, code)| (*symbol, code.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when no code is a prefix of another one.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&str> = self.entries.iter().map(|(_, c)| c.as_str()).collect();
        codes.sort_unstable();
        codes.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Node {
    Leaf {
        symbol: char,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    pub fn symbol(&self) -> Option<char> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

pub type HuffmanTree = Node;

/// Queue entry. `seq` breaks weight ties: lower sequence numbers leave first,
/// merged nodes get numbers after everything already queued.
#[derive(Eq, PartialEq)]
struct HeapNode {
    freq: u64,
    seq: usize,
    node: Node,
}

impl Ord for HeapNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for Min-Heap behavior in BinaryHeap (which is max-heap by default)
        other
            .freq
            .cmp(&self.freq)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shannon entropy of the table in bits per symbol.
pub fn entropy_from_freq(freq: &FreqTable) -> f64 {
    let total = freq.total();
    if total == 0 {
        return 0.0;
    }
    let total_f = total as f64;

    let entropy: f64 = freq
        .iter()
        .map(|(_, count)| {
            let p = count as f64 / total_f;
            p * (1.0 / p).log2()
        })
        .sum();

    debug!(
        "Calculated entropy: {:.4} bits/symbol (Total samples: {})",
        entropy, total
    );
    entropy
}

/// Greedy minimum-merge. The first node taken off the queue becomes the left
/// child, the second the right child.
pub fn build_huffman_tree(frequencies: &FreqTable) -> Result<HuffmanTree> {
    debug!(
        "Building Huffman tree from {} unique symbols",
        frequencies.len()
    );

    let mut heap = BinaryHeap::with_capacity(frequencies.len());
    for (seq, (symbol, freq)) in frequencies.iter().enumerate() {
        heap.push(HeapNode {
            freq,
            seq,
            node: Node::Leaf { symbol, freq },
        });
    }
    let mut next_seq = heap.len();

    loop {
        let left = heap.pop().ok_or(Error::EmptyInput)?;
        let Some(right) = heap.pop() else {
            debug!("Tree construction complete, root weight {}", left.freq);
            return Ok(left.node);
        };

        let freq = left.freq.checked_add(right.freq).ok_or_else(|| {
            Error::InvalidTable(String::from("total weight overflows u64"))
        })?;
        trace!(
            "Merging weights {} and {} into {}",
            left.freq, right.freq, freq
        );
        heap.push(HeapNode {
            freq,
            seq: next_seq,
            node: Node::Internal {
                freq,
                left: Box::new(left.node),
                right: Box::new(right.node),
            },
        });
        next_seq += 1;
    }
}

/// Walks the tree, `'0'` for left and `'1'` for right. A tree that is a single
/// leaf gives its symbol the code `"0"`.
pub fn build_code_table(root: &HuffmanTree) -> CodeTable {
    let mut table = CodeTable::default();
    match root {
        Node::Leaf { symbol, .. } => table.insert(*symbol, String::from("0")),
        Node::Internal { .. } => assign_codes(root, String::new(), &mut table),
    }
    debug!("Code table built with {} entries", table.len());
    table
}

fn assign_codes(node: &Node, prefix: String, table: &mut CodeTable) {
    match node {
        Node::Leaf { symbol, .. } => {
            trace!("Assigning code to {:?}: '{}'", symbol, prefix);
            table.insert(*symbol, prefix);
        }
        Node::Internal { left, right, .. } => {
            assign_codes(left, format!("{}0", prefix), table);
            assign_codes(right, format!("{}1", prefix), table);
        }
    }
}

pub fn encode(text: &str, codes: &CodeTable) -> Result<String> {
    let mut bits = String::with_capacity(text.len() * 2);
    for (position, symbol) in text.chars().enumerate() {
        let code = codes
            .get(symbol)
            .ok_or(Error::MissingCode { symbol, position })?;
        bits.push_str(code);
    }
    debug!("Encoded {} bytes of text into {} bits", text.len(), bits.len());
    Ok(bits)
}

/// Walks `root` bit by bit, emitting a symbol and restarting at the root on
/// every leaf.
pub fn decode(bits: &str, root: &HuffmanTree) -> Result<String> {
    let mut text = String::new();
    let mut current = root;
    let mut dangling = 0;

    for (position, bit) in bits.chars().enumerate() {
        let next: &Node = match (bit, current) {
            ('0', Node::Internal { left, .. }) => left,
            ('1', Node::Internal { right, .. }) => right,
            // single-leaf tree
            ('0', Node::Leaf { .. }) => current,
            ('1', Node::Leaf { .. }) => {
                return Err(MalformedEncoding::NoBranch { position }.into());
            }
            (found, _) => {
                return Err(MalformedEncoding::InvalidBit { position, found }.into());
            }
        };

        match next {
            Node::Leaf { symbol, .. } => {
                text.push(*symbol);
                current = root;
                dangling = 0;
            }
            Node::Internal { .. } => {
                current = next;
                dangling += 1;
            }
        }
    }

    if dangling > 0 {
        return Err(MalformedEncoding::Truncated { dangling }.into());
    }
    debug!("Decoded {} bits into {} bytes of text", bits.len(), text.len());
    Ok(text)
}

/// One row of the code listing: a symbol, its code and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    pub symbol: char,
    pub code: String,
    pub frequency: u64,
}

pub fn code_entries(codes: &CodeTable, freqs: &FreqTable) -> Vec<CodeEntry> {
    codes
        .pairs()
        .map(|(symbol, code)| CodeEntry {
            symbol,
            code: code.to_owned(),
            frequency: freqs.get(symbol),
        })
        .collect()
}

/// A finished pipeline run. Holds on to the tree so later decodes do not
/// depend on the code table.
#[derive(Debug, Clone)]
pub struct Huffman {
    freqs: FreqTable,
    tree: HuffmanTree,
    codes: CodeTable,
}

impl Huffman {
    pub fn new(freqs: FreqTable) -> Result<Self> {
        let tree = build_huffman_tree(&freqs)?;
        let codes = build_code_table(&tree);
        Ok(Self { freqs, tree, codes })
    }

    /// Builds the coder for `text` and encodes it in one go.
    pub fn compress(text: &str) -> Result<(Self, String)> {
        let huffman = Self::new(analyze(text))?;
        let bits = huffman.encode(text)?;
        Ok((huffman, bits))
    }

    pub fn encode(&self, text: &str) -> Result<String> {
        encode(text, &self.codes)
    }

    pub fn decode(&self, bits: &str) -> Result<String> {
        decode(bits, &self.tree)
    }

    pub fn freqs(&self) -> &FreqTable {
        &self.freqs
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    pub fn entries(&self) -> Vec<CodeEntry> {
        code_entries(&self.codes, &self.freqs)
    }
}
