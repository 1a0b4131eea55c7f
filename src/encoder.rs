use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{debug, error, info};

use huffman_visualizer::cli::{init_logging, read_input};
use huffman_visualizer::container::write_container;
use huffman_visualizer::render::render_code_table;
use huffman_visualizer::stats::CompressionStats;
use huffman_visualizer::{Error, Huffman, Result};

/// Huffman-encode a text file into a `.huff` container.
#[derive(Parser, Debug)]
#[clap(version)]
struct Args {
    /// Text file to encode. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Where to write the container.
    #[clap(short, long, default_value = "output.huff")]
    output: PathBuf,

    /// Print every symbol with its code and occurrence count.
    #[clap(short, long)]
    table: bool,

    /// More log output; repeat for more detail.
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(args: &Args) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    if text.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    let (huffman, bits) = Huffman::compress(&text)?;
    debug!("Tree depth: {}", huffman.tree().depth());

    info!("Writing container: {}", args.output.display());
    let file = File::create(&args.output)?;
    write_container(BufWriter::new(file), huffman.freqs(), &bits)?;

    if args.table {
        print!("{}", render_code_table(&huffman.entries()));
    }

    let stats = CompressionStats::measure(&text, huffman.freqs(), &bits);
    println!(
        "\r\n✅ Encoding successful.\n\
         📂  Input:       {} ({} symbols, {} distinct)\n\
         💾  Output:      {} ({} bits)\n\
         📏  Fixed width: {} bits ({:.2}x)\n\
         ℹ️  Entropy:     {:.4} bits/symbol (average code {:.4})\n\
         🗜️  Saving:      {:.2}% against UTF-8",
        args.input
            .as_ref()
            .map_or_else(|| String::from("<stdin>"), |p| p.display().to_string()),
        stats.symbols,
        stats.distinct,
        args.output.display(),
        stats.encoded_bits,
        stats.fixed_width_bits,
        stats.fixed_width_ratio(),
        stats.entropy,
        stats.average_code_len,
        stats.space_saving()
    );
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        error!("Compression failed: {}", e);
        process::exit(1);
    }
}
