//! aim-probe: evaluate one auto-aim shot and print the outcome as JSON.
//!
//! Usage:
//!   aim-probe run scenario.json [--params autoaim.json]
//!   aim-probe synthetic --seed 42 --count 32
//!
//! Set `RUST_LOG=debug` to see every scoring decision.

use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;

use aimassist_core::config::AutoAimParams;
use aimassist_sim::scenario::{run_synthetic, Scenario, ScenarioOutcome};

const DEFAULT_SEED: u64 = 42;
const DEFAULT_COUNT: usize = 32;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "synthetic" => cmd_synthetic(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "aim-probe: AIMASSIST shot evaluation tool\n\
         \n\
         Commands:\n\
         \n\
         run <scenario.json>  Fire one shot in an authored scenario\n\
         \n\
           --params <path>    Replace the scenario's auto-aim params\n\
         \n\
         synthetic            Fire one shot into a seeded random scatter\n\
         \n\
           --seed <N>         RNG seed (default: 42)\n\
           --count <N>        Number of targets (default: 32)\n\
         \n\
         Examples:\n\
         \n\
           aim-probe run demos/duel.json --params demos/sniper.json\n\
           RUST_LOG=debug aim-probe synthetic --seed 7 --count 64\n"
    );
}

fn parse_flag<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(&args[i + 1]);
        }
    }
    None
}

fn parse_number<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    match parse_flag(args, flag) {
        Some(raw) => match raw.parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Error: {flag} expects a number, got {raw:?}");
                process::exit(1);
            }
        },
        None => default,
    }
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    let Some(path) = args.first().filter(|a| !a.starts_with("--")).map(PathBuf::from) else {
        eprintln!("Error: scenario path is required");
        process::exit(1);
    };

    let text = match std::fs::read_to_string(&path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            process::exit(1);
        }
    };
    let mut scenario = match Scenario::from_json(&text) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error parsing {}: {e}", path.display());
            process::exit(1);
        }
    };

    if let Some(params_path) = parse_flag(args, "--params") {
        match AutoAimParams::load(std::path::Path::new(params_path)) {
            Ok(p) => scenario.params = p,
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    }

    tracing::info!(
        scenario = %path.display(),
        candidates = scenario.candidates.len(),
        "running scenario"
    );
    print_outcome(&scenario.run());
}

// --- Synthetic command ---

fn cmd_synthetic(args: &[String]) {
    let seed = parse_number(args, "--seed", DEFAULT_SEED);
    let count = parse_number(args, "--count", DEFAULT_COUNT);

    tracing::info!(seed, count, "running synthetic scenario");
    print_outcome(&run_synthetic(seed, count));
}

fn print_outcome(outcome: &ScenarioOutcome) {
    match outcome.selected {
        Some(id) => tracing::info!(
            target_id = %id,
            deviation_deg = outcome.deviation_deg,
            "shot assisted"
        ),
        None => tracing::info!("no assist"),
    }

    match serde_json::to_string_pretty(outcome) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing outcome: {e}");
            process::exit(1);
        }
    }
}
