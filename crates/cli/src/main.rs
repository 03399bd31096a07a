//! TLB replacement-policy simulator CLI.
//!
//! This binary is the driver around the core engine. It performs:
//! 1. **Input acquisition:** Reads trace text from a file or standard input.
//! 2. **Decoding:** Parses the multi-test-case format (or a bare address
//!    list with `--capacity`) and narrows addresses to page numbers.
//! 3. **Replay:** Runs all four policies per test case and prints one
//!    `<fifo> <lifo> <lru> <opt>` line (or a JSON report) per case.

use std::io::Read;
use std::path::PathBuf;
use std::{fs, process};

use clap::Parser;

use tlbsim_core::config::Config;
use tlbsim_core::sim::{Simulator, TestCase, parse_refs, parse_trace};

#[derive(Parser, Debug)]
#[command(
    name = "tlbsim",
    author,
    version,
    about = "TLB replacement-policy simulator (FIFO, LIFO, LRU, OPT)",
    long_about = "Replay a trace of memory references against four replacement policies and \
report the hit count of each.\n\nThe default input format is the classic multi-test-case \
text: a count T, then per case a header `S P K N` followed by N hex addresses. Pass \
--capacity to replay a bare list of hex addresses instead.\n\nExamples:\n  tlbsim traces/gcc.txt\n  \
tlbsim --capacity 64 --json < addresses.txt"
)]
struct Cli {
    /// Trace file to replay; reads standard input when omitted.
    file: Option<PathBuf>,

    /// Replay the input as a bare list of hex addresses at this TLB capacity
    /// (no per-case headers).
    #[arg(short = 'k', long)]
    capacity: Option<usize>,

    /// Page size in KiB for bare address lists (headers carry their own).
    #[arg(long, default_value_t = 4)]
    page_size: u64,

    /// Emit each per-case report as JSON instead of the summary line.
    #[arg(long)]
    json: bool,

    /// Print the full statistics banner after each case.
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-v = debug, -vv = trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(err) = run(&cli) {
        eprintln!("tlbsim: {err}");
        process::exit(1);
    }
}

/// Installs a stderr tracing subscriber; `RUST_LOG` overrides `-v` levels.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the input, replays every test case, and prints the reports.
fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let input = match &cli.file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            let _ = std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let cases = match cli.capacity {
        Some(capacity) => vec![TestCase {
            config: Config {
                capacity,
                page_size_kib: cli.page_size,
            },
            refs: parse_refs(&input)?,
        }],
        None => parse_trace(&input)?,
    };

    for case in cases {
        let simulator = Simulator::new(case.config)?;
        let report = simulator.run(&case.vpns());
        if cli.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("{}", report.summary_line());
        }
        if cli.stats {
            report.print();
        }
    }
    Ok(())
}
