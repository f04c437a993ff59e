use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use pagesim::input::read_references;
use pagesim::logging::init_logger;
use pagesim::{FrameCapacity, Policy, Report, Result, SimConfig, Simulator};

/// Simulate FIFO and LRU page replacement over a reference string.
#[derive(Debug, Parser)]
#[clap(name = "pagesim", version)]
struct Args {
    /// File holding whitespace-separated page numbers.
    page_reference_file: PathBuf,

    /// Number of frames (1-10).
    number_of_frames: String,

    /// Policy to simulate; repeat to run several. Defaults to FIFO then LRU.
    #[clap(short = 'p', long = "policy")]
    policies: Vec<Policy>,

    /// Run the policies on separate threads.
    #[clap(long)]
    parallel: bool,

    /// Also print the pages each policy evicted.
    #[clap(short = 'e', long)]
    evictions: bool,

    /// Also print hit/fault statistics.
    #[clap(short = 's', long)]
    stats: bool,
}

fn print_report(report: &Report, args: &Args) {
    println!("{}", report);
    if args.evictions {
        println!("{}", report.render_evictions());
    }
    if args.stats {
        println!("{}", report.stats);
    }
}

fn run(args: &Args) -> Result<()> {
    // Validate frames before touching the file, as the engine expects.
    let capacity = FrameCapacity::parse(&args.number_of_frames)?;
    let config = SimConfig::new(capacity)
        .with_policies(args.policies.clone())
        .with_parallel(args.parallel);

    let references = read_references(&args.page_reference_file, config.max_references)?;
    info!(
        "simulating {} references with {}",
        references.len(),
        config.capacity
    );

    for report in Simulator::run_config(&config, &references) {
        print_report(&report, args);
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logger();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
