use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{debug, error, info};

use huffman_visualizer::cli::init_logging;
use huffman_visualizer::container::read_container;
use huffman_visualizer::Result;

/// Decode a `.huff` container back into text.
#[derive(Parser, Debug)]
#[clap(version)]
struct Args {
    /// Container written by `encode`.
    input: PathBuf,

    /// Where to write the decoded text.
    output: PathBuf,

    /// More log output; repeat for more detail.
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(args: &Args) -> Result<()> {
    info!("Reading encoded file: {}", args.input.display());
    let container = read_container(BufReader::new(File::open(&args.input)?))?;
    debug!(
        "Container holds {} symbols and {} bits",
        container.table.len(),
        container.bits.len()
    );

    let bit_count = container.bits.len();
    let (huffman, text) = container.decode()?;

    info!("Writing decoded output to file: {}", args.output.display());
    fs::write(&args.output, &text)?;

    println!(
        "\r\n✅ Decoding successful.\n\
         📂 Input:  {} ({} bits)\n\
         💾 Output: {} ({} symbols, {} bytes)",
        args.input.display(),
        bit_count,
        args.output.display(),
        huffman.freqs().total(),
        text.len()
    );
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        error!("Decompression failed: {}", e);
        process::exit(1);
    }
}
