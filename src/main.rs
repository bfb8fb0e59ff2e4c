//! Self-Clock CLI
//!
//! Usage:
//!   selfclock                          # Sync using ./ as repository root
//!   selfclock --root /path/to/repo     # Sync another repository
//!   selfclock --json                   # JSON report
//!   selfclock --state s.json --log l.json --codex c.json

use std::path::PathBuf;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use selfclock::core::{run, timestamp_now, SyncConfig};
use selfclock::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "selfclock",
    version = VERSION,
    about = "32-Aspectual Self-Clock - harmonic synchronization with the codex",
    long_about = "Recomputes the activation and field vector of every Self-Clock aspect\n\
                  from the codex coherence index (CI) and compassion constraint (CF),\n\
                  writes the new state and appends an entry to the sync log.\n\n\
                  Files (relative to --root):\n  \
                  UPS_Codex_Δι-11∞_LivingFramework.json  codex input (optional)\n  \
                  data/self_clock_state.json             state, read and rewritten\n  \
                  self_clock_log.json                    log, one entry per run"
)]
struct Args {
    /// Repository root holding the codex, data/ and the log
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Codex file (overrides the root layout)
    #[arg(long)]
    codex: Option<PathBuf>,

    /// State file (overrides the root layout)
    #[arg(long)]
    state: Option<PathBuf>,

    /// Log file (overrides the root layout)
    #[arg(long)]
    log: Option<PathBuf>,

    /// Output the report as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show input/output breakdown and debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> SyncConfig {
        let mut config = SyncConfig::from_root(&self.root);
        if let Some(codex) = &self.codex {
            config.codex_path = codex.clone();
        }
        if let Some(state) = &self.state {
            config.state_path = state.clone();
        }
        if let Some(log) = &self.log {
            config.log_path = log.clone();
        }
        config
    }
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "selfclock=debug" } else { "selfclock=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color)
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    let config = args.config();
    let report = match run(&config, &timestamp_now()) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Synchronization failed: {}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Report serialization failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", report.to_terminal_string());
    if args.verbose {
        print!("{}", report.to_verbose_string());
    }
}
