use std::{io, process};

use clap::Parser;
use perfrun::{
    DetailMode, GateOutcome, PerfRunError, Reporter, RunConfig, Runner, ThresholdGate, TrailingSleep,
    builtin::{BuiltinWorkload, WorkloadKind},
    logging::init_logging,
    report,
};

#[derive(Parser, Debug)]
#[command(about, version, name = "perfrun")]
/// Times a built-in workload over repeated sequential runs
struct Args {
    /// Number of timed runs.
    #[arg(short = 'n', long = "tests", default_value_t = 5)]
    tests: u32,
    /// Pause after each run, in seconds.
    #[arg(short, long, default_value_t = 0)]
    interval: u64,
    /// Do not pause after the final run.
    #[arg(long)]
    skip_last_sleep: bool,
    /// Workload to time.
    #[arg(short, long, value_enum, default_value_t = WorkloadKind::Spin)]
    workload: WorkloadKind,
    /// Work amount: loop iterations, milliseconds or element count.
    #[arg(long, default_value_t = 10_000)]
    size: u64,
    /// Seed for the sort workload.
    #[arg(long, default_value_t = 0x5EED)]
    seed: u64,
    /// Whether to list every run after the summary.
    #[arg(long, value_enum, default_value_t = DetailMode::Prompt)]
    details: DetailMode,
    /// Print results as JSON instead of text; every run is always included.
    #[arg(long, conflicts_with = "details")]
    json: bool,
    /// Fail if the average run exceeds this many seconds.
    #[arg(long)]
    max_average: Option<f64>,
    /// Fail if any single run exceeds this many seconds.
    #[arg(long)]
    max_single: Option<f64>,
}

fn main() {
    init_logging();
    let args = Args::parse();

    let (config, gate) = match configure(&args) {
        Ok(parts) => parts,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    match run(&args, &config, &gate) {
        Ok(GateOutcome::Pass) => {}
        Ok(GateOutcome::Fail(reasons)) => {
            for reason in &reasons {
                eprintln!("gate: {reason}");
            }
            process::exit(1);
        }
        Err(err) => {
            eprintln!("run failed: {err}");
            if let Some(partial) = err.partial_results() {
                eprintln!("partial results: {}", partial.summary());
            }
            process::exit(1);
        }
    }
}

fn configure(args: &Args) -> Result<(RunConfig, ThresholdGate), PerfRunError> {
    let config = RunConfig::new(args.tests, args.interval)?;
    let config = if args.skip_last_sleep {
        config.with_trailing_sleep(TrailingSleep::SkipLast)
    } else {
        config
    };
    let gate = ThresholdGate::new(args.max_average, args.max_single)?;
    Ok((config, gate))
}

fn run(
    args: &Args,
    config: &RunConfig,
    gate: &ThresholdGate,
) -> Result<GateOutcome, PerfRunError> {
    let stdout = io::stdout();
    if !args.json {
        Reporter::new(stdout.lock()).write_description(config)?;
    }

    let workload = BuiltinWorkload::new(args.workload, args.size, args.seed);
    let results = Runner::new().run_config(config, workload)?;

    if args.json {
        Reporter::new(stdout.lock()).write_json(&results)?;
    } else {
        report::present(&results, args.details, io::stdin().lock(), stdout.lock())?;
    }

    Ok(gate.evaluate(&results))
}
