use std::process;
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};
use log::{error, info};

use huffman_visualizer::cli::init_logging;
use huffman_visualizer::nqueens::{self, Board, Step};
use huffman_visualizer::render::{render_code_table, render_tree};
use huffman_visualizer::stats::CompressionStats;
use huffman_visualizer::{Huffman, Result};

/// Show how Huffman coding and N-Queens backtracking work, step by step.
#[derive(Parser, Debug)]
#[clap(version)]
struct Args {
    #[clap(subcommand)]
    command: Command,

    /// More log output; repeat for more detail.
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode TEXT, print the bitstring and decode it again.
    Huffman {
        text: String,

        /// Print the tree outline.
        #[clap(long)]
        tree: bool,

        /// Print every symbol with its code and occurrence count.
        #[clap(long)]
        table: bool,
    },
    /// Solve N-Queens by backtracking.
    Queens {
        #[clap(default_value_t = 8)]
        n: usize,

        /// Pause between frames when tracing.
        #[clap(long, default_value_t = 0)]
        delay_ms: u64,

        /// Draw the board after every placement and removal.
        #[clap(long)]
        trace: bool,
    },
}

fn huffman(text: &str, show_tree: bool, show_table: bool) -> Result<()> {
    let (huffman, bits) = Huffman::compress(text)?;

    if show_tree {
        println!("Huffman tree:\n{}", render_tree(huffman.tree()));
    }
    if show_table {
        println!("Codes:\n{}", render_code_table(&huffman.entries()));
    }

    let decoded = huffman.decode(&bits)?;
    let stats = CompressionStats::measure(text, huffman.freqs(), &bits);
    println!("Encoded: {}", bits);
    println!("Decoded: {}", decoded);
    println!(
        "{} bits against {} fixed-width and {} raw ({:.2}% saved)",
        stats.encoded_bits,
        stats.fixed_width_bits,
        stats.raw_bits,
        stats.space_saving()
    );
    Ok(())
}

fn queens(n: usize, delay: Duration, trace: bool) -> Result<()> {
    let solution = nqueens::solve(n)?;
    info!("Found a solution after {} steps", solution.steps.len());

    if trace {
        let mut board = Board::new(n);
        for (i, &step) in solution.steps.iter().enumerate() {
            board.apply(step);
            let (verb, row, col) = match step {
                Step::Place { row, col } => ("place", row, col),
                Step::Remove { row, col } => ("remove", row, col),
            };
            println!("step {}: {} ({}, {})\n{}", i + 1, verb, row, col, board.render());
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }
    }

    println!("{}", solution.board.render());
    println!("Finished! ({} steps)", solution.steps.len());
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = match &args.command {
        Command::Huffman { text, tree, table } => huffman(text, *tree, *table),
        Command::Queens {
            n,
            delay_ms,
            trace,
        } => queens(*n, Duration::from_millis(*delay_ms), *trace),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
