//! pagesim CLI: compare page replacement policies on a reference string.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::info;

use pagesim::common::config::{
    DEFAULT_FIXTURE_SEED, DEFAULT_FRAME_COUNT, DEFAULT_FRAME_SWEEP, DEFAULT_LOG_FILTER,
};
use pagesim::common::parse_reference_string;
use pagesim::fixtures::{self, Fixture};
use pagesim::report::{format_pages, write_comparison, write_sweep, write_trace};
use pagesim::{compare, run, sweep, Error, PageId, Policy, Result};

#[derive(Parser)]
#[command(name = "pagesim")]
#[command(about = "Compare FIFO, LRU and Optimal page replacement")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Write the report to a file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Trace one policy step by step
    Run {
        /// Eviction policy (fifo, lru, optimal)
        #[arg(short, long, default_value = "fifo")]
        policy: Policy,

        /// Number of frames
        #[arg(short, long, default_value_t = DEFAULT_FRAME_COUNT)]
        frames: usize,

        #[command(flatten)]
        reference: ReferenceArgs,
    },

    /// Trace and compare every policy at one frame count
    Compare {
        /// Number of frames
        #[arg(short, long, default_value_t = DEFAULT_FRAME_COUNT)]
        frames: usize,

        #[command(flatten)]
        reference: ReferenceArgs,
    },

    /// Tabulate faults over several frame counts and report Belady's anomalies
    Sweep {
        /// Strictly ascending frame counts, e.g. 3,4,5
        #[arg(short, long, value_delimiter = ',', default_values_t = DEFAULT_FRAME_SWEEP)]
        frames: Vec<usize>,

        /// Policies to include (default: all)
        #[arg(short, long, value_delimiter = ',')]
        policy: Vec<Policy>,

        #[command(flatten)]
        reference: ReferenceArgs,
    },

    /// List the built-in reference strings
    Fixtures {
        /// Seed for the random fixture
        #[arg(long, default_value_t = DEFAULT_FIXTURE_SEED)]
        seed: u64,
    },

    /// Run the full comparison on every built-in reference string
    Demo {
        /// Seed for the random fixture
        #[arg(long, default_value_t = DEFAULT_FIXTURE_SEED)]
        seed: u64,
    },
}

/// Where the reference string comes from.
#[derive(Args)]
struct ReferenceArgs {
    /// Reference string, e.g. "7,0,1,2,0,3"
    #[arg(short, long, conflicts_with = "fixture")]
    refs: Option<String>,

    /// Built-in reference string by name (default: standard-test)
    #[arg(short = 'x', long)]
    fixture: Option<String>,

    /// Seed for the random fixture
    #[arg(long, default_value_t = DEFAULT_FIXTURE_SEED)]
    seed: u64,
}

impl ReferenceArgs {
    fn resolve(&self) -> Result<Vec<PageId>> {
        if let Some(refs) = &self.refs {
            return parse_reference_string(refs);
        }

        let name = self.fixture.as_deref().unwrap_or("standard-test");
        fixtures::by_name(name, self.seed)
            .map(|fixture| fixture.pages)
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "unknown fixture '{}' (see `pagesim fixtures`)",
                    name
                ))
            })
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = execute(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => DEFAULT_LOG_FILTER,
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}

fn execute(cli: Cli) -> Result<()> {
    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => {
            info!("Writing report to {}", path.display());
            Box::new(BufWriter::new(File::create(path)?))
        }
        None => Box::new(io::stdout().lock()),
    };

    match cli.command {
        Commands::Run {
            policy,
            frames,
            reference,
        } => cmd_run(&mut out, policy, frames, &reference.resolve()?),
        Commands::Compare { frames, reference } => {
            cmd_compare(&mut out, frames, &reference.resolve()?)
        }
        Commands::Sweep {
            frames,
            policy,
            reference,
        } => cmd_sweep(&mut out, &frames, &policy, &reference.resolve()?),
        Commands::Fixtures { seed } => cmd_fixtures(&mut out, &fixtures::all(seed)),
        Commands::Demo { seed } => cmd_demo(&mut out, seed),
    }?;

    out.flush()?;
    Ok(())
}

fn cmd_run<W: Write>(
    out: &mut W,
    policy: Policy,
    frames: usize,
    reference: &[PageId],
) -> Result<()> {
    let result = run(policy, reference, frames)?;
    write_trace(out, &result)
}

fn cmd_compare<W: Write>(out: &mut W, frames: usize, reference: &[PageId]) -> Result<()> {
    let comparison = compare(reference, frames)?;

    for result in &comparison.results {
        write_trace(out, result)?;
        writeln!(out)?;
    }
    write_comparison(out, reference, &comparison)
}

fn cmd_sweep<W: Write>(
    out: &mut W,
    frames: &[usize],
    policies: &[Policy],
    reference: &[PageId],
) -> Result<()> {
    let all = Policy::ALL;
    let policies = if policies.is_empty() {
        &all[..]
    } else {
        policies
    };

    writeln!(out, "Reference String: {}", format_pages(reference))?;
    let table = sweep(reference, frames, policies)?;
    write_sweep(out, &table)
}

fn cmd_fixtures<W: Write>(out: &mut W, fixtures: &[Fixture]) -> Result<()> {
    for fixture in fixtures {
        writeln!(
            out,
            "{:<16} {:<16} {}",
            fixture.slug(),
            fixture.name,
            format_pages(&fixture.pages)
        )?;
    }
    Ok(())
}

fn cmd_demo<W: Write>(out: &mut W, seed: u64) -> Result<()> {
    let standard = fixtures::standard();

    writeln!(out, "===== STANDARD TEST CASE =====")?;
    cmd_compare(out, DEFAULT_FRAME_COUNT, &standard.pages)?;

    writeln!(out)?;
    writeln!(out, "===== TESTING WITH DIFFERENT FRAME SIZES =====")?;
    cmd_sweep(out, &DEFAULT_FRAME_SWEEP, &Policy::ALL, &standard.pages)?;

    writeln!(out)?;
    writeln!(out, "===== TESTING DIFFERENT ACCESS PATTERNS =====")?;
    for fixture in fixtures::all(seed) {
        if fixture.name == standard.name {
            continue;
        }
        writeln!(out)?;
        writeln!(out, "----- {} Pattern -----", fixture.name)?;
        let comparison = compare(&fixture.pages, DEFAULT_FRAME_COUNT)?;
        write_comparison(out, &fixture.pages, &comparison)?;
    }

    writeln!(out)?;
    writeln!(out, "===== TESTING FOR BELADY'S ANOMALY =====")?;
    cmd_sweep(out, &DEFAULT_FRAME_SWEEP, &Policy::ALL, &fixtures::belady().pages)
}
