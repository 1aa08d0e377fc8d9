use std::cell::RefCell;
use std::ffi::CString;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lazyseq::{
    deferred, from_iter, infinite_from, pairwise, NullTerminated, PtrRange, RandomAccessSequence,
    Sequence, SequenceExt,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lazyseq", about = "Drive lazy sequence adapters from the command line")]
struct Cli {
    /// Log every sequence event (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Combine each adjacent pair of values.
    Pairwise {
        /// Input values, in order.
        values: Vec<i64>,
        /// Combining operation applied as op(left, right).
        #[arg(long, value_enum, default_value_t = Op::Add)]
        op: Op,
    },
    /// Print the start of an infinite counting sequence.
    Iota {
        /// First value.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        start: i64,
        /// Number of values to print.
        #[arg(long)]
        take: usize,
        /// Also print the value at this offset, read without advancing.
        #[arg(long)]
        at: Option<usize>,
    },
    /// Walk text as a NUL-terminated byte block.
    Cstr {
        /// Text to walk (must not contain NUL bytes).
        text: String,
    },
    /// Run a two-stage pipeline whose second stage is built on first touch.
    Deferred {
        /// Values fed to the first stage.
        values: Vec<i64>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Op {
    Add,
    Sub,
    Mul,
    Max,
}

impl Op {
    fn combine(self, left: i64, right: i64) -> i64 {
        match self {
            Op::Add => left.wrapping_add(right),
            Op::Sub => right.wrapping_sub(left),
            Op::Mul => left.wrapping_mul(right),
            Op::Max => left.max(right),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Pairwise { values, op } => run_pairwise(&values, op),
        Commands::Iota { start, take, at } => run_iota(start, take, at)?,
        Commands::Cstr { text } => run_cstr(text)?,
        Commands::Deferred { values } => run_deferred(&values),
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("lazyseq=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_pairwise(values: &[i64], op: Op) {
    let combined = pairwise(
        move |left: &i64, right: &i64| op.combine(*left, *right),
        PtrRange::new(values),
    );

    if combined.is_empty() {
        println!("No adjacent pairs in {} value(s).", values.len());
        return;
    }
    for (idx, value) in combined.iter().enumerate() {
        println!("{}\t{:?}({}, {})\t{}", idx, op, values[idx], values[idx + 1], value);
    }
}

fn run_iota(start: i64, take: usize, at: Option<usize>) -> Result<()> {
    let seq = infinite_from(start);

    for value in seq.iter().take(take) {
        println!("{}", value);
    }

    if let Some(offset) = at {
        i64::try_from(offset)
            .ok()
            .and_then(|delta| start.checked_add(delta))
            .with_context(|| format!("offset {} overflows a 64-bit count from {}", offset, start))?;
        println!("at({}) = {}", offset, seq.at(offset));
    }

    Ok(())
}

fn run_cstr(text: String) -> Result<()> {
    let owned = CString::new(text).context("text contains an interior NUL byte")?;
    let bytes = NullTerminated::from_cstr(&owned);

    if bytes.is_empty() {
        println!("Empty string.");
        return Ok(());
    }
    for (idx, byte) in bytes.iter().enumerate() {
        println!("{}\t0x{:02x}\t{:?}", idx, byte, char::from(*byte));
    }

    Ok(())
}

fn run_deferred(values: &[i64]) {
    let totals = RefCell::new(Vec::with_capacity(values.len()));

    // Stage one records running totals as a side effect of being read.
    let running = PtrRange::new(values).map(|value: &i64| {
        let mut totals = totals.borrow_mut();
        let next = totals.last().copied().unwrap_or(0i64).wrapping_add(*value);
        totals.push(next);
        next
    });
    // Stage two snapshots whatever stage one has recorded when first touched.
    let snapshot = deferred(|| from_iter(totals.borrow().clone()));

    let consumed = running.iter().count();
    println!(
        "stage one consumed {} value(s); stage two constructed: {}",
        consumed,
        snapshot.is_constructed()
    );

    let seen: Vec<String> = snapshot.iter().map(|total| total.to_string()).collect();
    println!("stage two saw [{}]", seen.join(", "));
}
