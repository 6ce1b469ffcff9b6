//! Voltview command line tool
//!
//! Takes one snapshot from the sysfs power-supply class and prints the
//! resulting summary. A single reading never yields a remaining-time
//! estimate, so the output shows the estimate-free phrasing; the point of
//! the tool is inspecting what the presentation layer would receive.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process;
use tracing::debug;
use voltview_power::{SnapshotSource, SysfsPowerSource};
use voltview_stats::RateEstimator;
use voltview_summary::{SummaryBuilder, Templates};

struct Args {
    short: bool,
    templates: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        short: false,
        templates: None,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--short" => args.short = true,
            "--templates" => {
                let path = iter.next().context("--templates requires a path")?;
                args.templates = Some(PathBuf::from(path));
            }
            "--help" | "-h" => {
                println!("Usage: voltview [--short] [--templates <file.toml>]");
                process::exit(0);
            }
            other => anyhow::bail!("unknown argument: {other}"),
        }
    }

    Ok(args)
}

fn setup_logging() {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_ansi(false))
        .init();
}

fn main() -> Result<()> {
    setup_logging();
    let args = parse_args()?;

    let templates = match &args.templates {
        Some(path) => Templates::load(path)
            .with_context(|| format!("failed to load templates from {}", path.display()))?,
        None => Templates::default(),
    };

    let source = SysfsPowerSource::new().context("no usable battery on this system")?;
    let snapshot = source.snapshot().context("failed to read battery state")?;
    debug!(?snapshot, "battery reading");

    // A fresh estimator has no history; both queries answer None and the
    // labels degrade to their estimate-free forms.
    let mut estimator = RateEstimator::new();
    estimator.record(&snapshot, 0);

    let info = SummaryBuilder::new(&templates)
        .short_string(args.short)
        .build(&snapshot, &estimator, 0);

    println!("state:     {}", if info.discharging { "discharging" } else { "plugged in" });
    println!("battery:   {}", info.battery_percent_string);
    println!("status:    {}", info.status_label);
    println!("charge:    {}", info.charge_label);
    match &info.remaining_label {
        Some(label) => println!("remaining: {label}"),
        None => println!("remaining: (no estimate)"),
    }

    Ok(())
}
