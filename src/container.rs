//! Plain-text `.huff` container used by the `encode` and `decode` binaries.
//!
//! ```text
//! HUFF 1
//! <number of symbols>
//! <code point in hex> <count>     one line per symbol, table order
//! <bitstring>
//! ```
//!
//! Only the frequency table is stored. The reader rebuilds the tree from it,
//! which yields the same tree because construction is deterministic.

use std::io::{BufRead, Write};

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::huffman::{analyze, FreqTable, Huffman};

const MAGIC: &str = "HUFF 1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub table: FreqTable,
    pub bits: String,
}

impl Container {
    /// Rebuilds the coder from the stored table and decodes the bits. The
    /// decoded text must contain exactly the counts the table declares.
    pub fn decode(self) -> Result<(Huffman, String)> {
        let huffman = Huffman::new(self.table)?;
        let text = huffman.decode(&self.bits)?;

        let decoded = analyze(&text);
        let expected = huffman.freqs();
        let matches = decoded.len() == expected.len()
            && expected.iter().all(|(symbol, count)| decoded.get(symbol) == count);
        if !matches {
            return Err(Error::Container(format!(
                "decoded symbol counts ({} symbols) do not match the table ({} symbols)",
                decoded.total(),
                expected.total()
            )));
        }
        Ok((huffman, text))
    }
}

pub fn write_container<W: Write>(mut writer: W, table: &FreqTable, bits: &str) -> Result<()> {
    debug!("Writing container header for {} symbols", table.len());
    writeln!(writer, "{}", MAGIC)?;
    writeln!(writer, "{}", table.len())?;
    for (symbol, count) in table.iter() {
        writeln!(writer, "{:x} {}", u32::from(symbol), count)?;
    }
    writeln!(writer, "{}", bits)?;
    writer.flush()?;
    Ok(())
}

pub fn read_container<R: BufRead>(reader: R) -> Result<Container> {
    let mut lines = reader.lines();
    let mut next_line = |what: &str| -> Result<String> {
        let line = lines
            .next()
            .ok_or_else(|| Error::Container(format!("missing {what}")))??;
        Ok(line)
    };

    let magic = next_line("header")?;
    if magic != MAGIC {
        return Err(Error::Container(format!("unknown header {magic:?}")));
    }

    let count_line = next_line("symbol count")?;
    let count: usize = count_line
        .trim()
        .parse()
        .map_err(|_| Error::Container(format!("bad symbol count {count_line:?}")))?;
    debug!("Container declares {} symbols", count);

    let mut counts = Vec::with_capacity(count);
    for i in 0..count {
        let line = next_line("frequency entry")?;
        let entry = parse_entry(&line)
            .ok_or_else(|| Error::Container(format!("bad frequency entry {} {line:?}", i + 1)))?;
        trace!("Read entry {:?} x{}", entry.0, entry.1);
        counts.push(entry);
    }
    let table = FreqTable::from_counts(counts)?;

    let bits = next_line("bitstring")?;
    if let Some((position, found)) = bits.char_indices().find(|&(_, c)| c != '0' && c != '1') {
        return Err(Error::Container(format!(
            "bitstring has {found:?} at offset {position}"
        )));
    }

    for line in lines {
        if !line?.trim().is_empty() {
            return Err(Error::Container(String::from(
                "unexpected data after the bitstring",
            )));
        }
    }

    Ok(Container { table, bits })
}

fn parse_entry(line: &str) -> Option<(char, u64)> {
    let (code_point, count) = line.trim().split_once(' ')?;
    let symbol = char::from_u32(u32::from_str_radix(code_point, 16).ok()?)?;
    let count = count.trim().parse().ok()?;
    Some((symbol, count))
}
