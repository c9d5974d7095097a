mod cache;
mod cli;
mod clock;
mod config;
mod error;
mod listing;
mod normalize;
mod report;
mod scoring;
mod store;
mod types;

use crate::cache::{PassKey, ScoreCache};
use crate::clock::{Clock, FixedClock, SystemClock};
use crate::error::{AdScoreError, Result};
use crate::scoring::PassOutcome;
use crate::store::{AdSource, FileStore};
use clap::Parser;
use std::path::Path;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_logging(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

struct PassOptions<'a> {
    data: &'a Path,
    at: Option<&'a str>,
    persist: bool,
    no_cache: bool,
}

fn run_pass(options: PassOptions<'_>) -> Result<PassOutcome> {
    let store = FileStore::load(options.data)?;
    let root = match options.data.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let cfg = config::load_config(root)?.unwrap_or_default();
    let tz = cfg.timezone()?;
    let policy = cfg.missing_picture_policy();

    let instant = match options.at {
        Some(raw) => clock::parse_instant(raw)?,
        None => SystemClock.now(),
    };
    let pass_clock = FixedClock(instant);
    let mut ads = store.ads()?;

    if options.persist {
        let outcome = scoring::score_batch(&mut ads, &store, &pass_clock, tz, policy)?;
        store.save_ads(&ads)?;
        debug!(path = %store.path().display(), "persisted scored ads");
        return Ok(outcome);
    }

    if options.no_cache || !cfg.cache_enabled() {
        return scoring::score_batch(&mut ads, &store, &pass_clock, tz, policy);
    }

    let key = PassKey {
        data: store.raw_bytes(),
        irrelevant_date: clock::irrelevant_since(instant, tz)?,
        timezone: tz,
        policy,
    };
    let cache = ScoreCache::new(root.join(cfg.cache_dir()));
    debug!(dir = %cache.dir().display(), "using score cache");
    cache.get_or_score(&key, || {
        scoring::score_batch(&mut ads, &store, &pass_clock, tz, policy)
    })
}

fn report_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn finish(outcome: &PassOutcome) -> i32 {
    if outcome.skipped.is_empty() {
        return exit_code::SUCCESS;
    }
    for skipped in &outcome.skipped {
        warn!(
            "skipped ad {}: {}",
            skipped.ad,
            AdScoreError::PictureNotFound(skipped.picture)
        );
    }
    exit_code::WARNINGS
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Score(cmd) => {
            let outcome = run_pass(PassOptions {
                data: &cmd.data,
                at: cli.at.as_deref(),
                persist: cmd.persist,
                no_cache: cmd.no_cache,
            })?;
            let rendered =
                report::render("Scored ads", &outcome.scored, report_format(&cmd.format))?;
            println!("{rendered}");
            Ok(finish(&outcome))
        }
        cli::Commands::Public(cmd) => {
            let outcome = run_pass(PassOptions {
                data: &cmd.data,
                at: cli.at.as_deref(),
                persist: false,
                no_cache: cmd.no_cache,
            })?;
            let view = listing::relevant_view(&outcome.scored);
            let rendered = report::render("Relevant ads", &view, report_format(&cmd.format))?;
            println!("{rendered}");
            Ok(finish(&outcome))
        }
        cli::Commands::Quality(cmd) => {
            let outcome = run_pass(PassOptions {
                data: &cmd.data,
                at: cli.at.as_deref(),
                persist: false,
                no_cache: cmd.no_cache,
            })?;
            let view = listing::quality_view(&outcome.scored);
            let rendered =
                report::render("Needs improvement", &view, report_format(&cmd.format))?;
            println!("{rendered}");
            Ok(finish(&outcome))
        }
        cli::Commands::Normalize(cmd) => {
            for line in normalize::normalize_all(&cmd.texts) {
                println!("{line}");
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
