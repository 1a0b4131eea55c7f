//! Text views of a tree and its code listing.

use std::fmt;

use crate::huffman::{CodeEntry, HuffmanTree, Node};

/// Indented outline of a tree, one node per line.
pub struct Outline<'a>(pub &'a HuffmanTree);

impl fmt::Display for Outline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.0, 0, "root")
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node, depth: usize, label: &str) -> fmt::Result {
    let indent = "  ".repeat(depth);
    match node {
        Node::Leaf { symbol, freq } => writeln!(
            f,
            "{}{} -> '{}' [weight: {}]",
            indent,
            label,
            symbol.escape_debug(),
            freq
        ),
        Node::Internal { freq, left, right } => {
            writeln!(f, "{}{} [weight: {}]", indent, label, freq)?;
            write_node(f, left, depth + 1, "0")?;
            write_node(f, right, depth + 1, "1")
        }
    }
}

pub fn render_tree(root: &HuffmanTree) -> String {
    Outline(root).to_string()
}

/// Symbol, code and occurrence columns.
pub struct CodeListing<'a>(pub &'a [CodeEntry]);

impl fmt::Display for CodeListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("'{}'", e.symbol.escape_debug()))
            .collect();
        let symbol_width = symbols.iter().map(|s| s.chars().count()).max().unwrap_or(0).max(6);
        let code_width = self.0.iter().map(|e| e.code.len()).max().unwrap_or(0).max(4);

        writeln!(
            f,
            "{:<sw$}  {:<cw$}  occurrences",
            "symbol",
            "code",
            sw = symbol_width,
            cw = code_width
        )?;
        for (symbol, entry) in symbols.iter().zip(self.0) {
            writeln!(
                f,
                "{:<sw$}  {:<cw$}  {}",
                symbol,
                entry.code,
                entry.frequency,
                sw = symbol_width,
                cw = code_width
            )?;
        }
        Ok(())
    }
}

pub fn render_code_table(entries: &[CodeEntry]) -> String {
    CodeListing(entries).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::Huffman;

    #[test]
    fn outline_of_known_vector() {
        let (huffman, _) = Huffman::compress("aabbc").unwrap();
        let expected = "\
root [weight: 5]
  0 -> 'b' [weight: 2]
  1 [weight: 3]
    0 -> 'c' [weight: 1]
    1 -> 'a' [weight: 2]
";
        assert_eq!(render_tree(huffman.tree()), expected);
    }

    #[test]
    fn outline_of_single_leaf() {
        let (huffman, _) = Huffman::compress("\n\n").unwrap();
        assert_eq!(render_tree(huffman.tree()), "root -> '\\n' [weight: 2]\n");
    }

    #[test]
    fn listing_aligns_columns() {
        let (huffman, _) = Huffman::compress("aabbc").unwrap();
        let listing = render_code_table(&huffman.entries());
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(
            lines,
            vec![
                "symbol  code  occurrences",
                "'b'     0     2",
                "'c'     10    1",
                "'a'     11    2",
            ]
        );
    }

    #[test]
    fn listing_escapes_whitespace() {
        let (huffman, _) = Huffman::compress("a\tb\n").unwrap();
        let listing = render_code_table(&huffman.entries());
        assert!(listing.contains("'\\t'"));
        assert!(listing.contains("'\\n'"));
    }
}
