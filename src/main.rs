//! pagesim - run page replacement policies over a reference string

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use pagesim::{
    compare, parse_trace, to_trace, AccessOutcome, PageId, PolicyKind, SimulationResult,
    Simulator, DEFAULT_FRAME_COUNT, DEFAULT_TRACE,
};

/// pagesim - Simulate FIFO, LRU and Optimal page replacement
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Replacement policy: fifo, lru, optimal or all
    #[arg(short, long, default_value = "all")]
    policy: String,

    /// Number of physical frames
    #[arg(short, long, default_value_t = DEFAULT_FRAME_COUNT)]
    frames: usize,

    /// Reference string, e.g. "7,0,1,2,0,3" (defaults to the textbook string)
    #[arg(short, long)]
    trace: Option<String>,

    /// Only print totals, not every access
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let trace = match &args.trace {
        Some(text) => parse_trace(text).context("Failed to parse reference string")?,
        None => to_trace(&DEFAULT_TRACE),
    };

    let policies: Vec<PolicyKind> = if args.policy.eq_ignore_ascii_case("all") {
        PolicyKind::ALL.to_vec()
    } else {
        vec![args.policy.parse::<PolicyKind>().context("Failed to select policy")?]
    };

    if args.quiet {
        let results = compare(args.frames, &trace, &policies).context("Simulation failed")?;
        for result in &results {
            print_header(result.policy, &trace);
            print_footer(result);
        }
        return Ok(());
    }

    for (i, &policy) in policies.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let sim = Simulator::new(policy, args.frames).context("Invalid configuration")?;

        print_header(policy, &trace);
        println!("Pages Frames: {}", format_frames(&vec![None::<PageId>; args.frames]));
        let result = sim
            .run_with(&trace, |event| {
                let label = match event.outcome {
                    AccessOutcome::Hit => "Hit ",
                    AccessOutcome::Fault { .. } => "Miss",
                };
                println!("{} ({}): {}", label, event.page.0, format_frames(event.frames));
            })
            .with_context(|| format!("{} simulation failed", policy.name()))?;
        print_footer(&result);
    }

    Ok(())
}

fn print_header(policy: PolicyKind, trace: &[PageId]) {
    println!("-------- {} --------", policy.name());
    let pages: Vec<String> = trace.iter().map(|page| page.0.to_string()).collect();
    println!("Reference String: [{}]", pages.join(", "));
}

fn print_footer(result: &SimulationResult) {
    println!("Total Page Faults: {}", result.faults());
    println!("{}", result.stats);
    println!("-----------------------------------");
}

/// Render frames as `[7, 0, -]`.
fn format_frames(frames: &[Option<PageId>]) -> String {
    let slots: Vec<String> = frames
        .iter()
        .map(|slot| match slot {
            Some(page) => page.0.to_string(),
            None => "-".to_string(),
        })
        .collect();
    format!("[{}]", slots.join(", "))
}
