use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{info, warn};

use trellis::animation::{RectAnimator, Throttle};
use trellis::cli::{AnimateArgs, ArrangeArgs, CliArgs, Command, InitArgs};
use trellis::config::{AnimationConfig, LayoutConfig, LoadedConfig, resolve_inputs, save_config};
use trellis::layout::{ArrangementOverrides, arrange_files};
use trellis::output::{AnimationReport, LayoutReport, write_report};

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! so failures show even before the
        // logger is set up
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    info!("Trellis layout engine v{}", env!("CARGO_PKG_VERSION"));

    match &cli.command {
        Command::Arrange(args) => arrange(args),
        Command::Animate(args) => animate(args),
        Command::Init(args) => init(args),
    }
}

fn arrange(args: &ArrangeArgs) -> Result<()> {
    let paths = resolve_inputs(&args.input).context("failed to resolve layout files")?;

    let overrides = ArrangementOverrides {
        kind: args.strategy,
        columns: args.columns,
        margin: args.margin,
    };
    let layouts = arrange_files(&paths, overrides)?;

    let report = LayoutReport::new(&layouts);
    let overflow = report.overflow_count();
    if overflow > 0 {
        if args.strict {
            bail!("{} controls do not fit in their containers", overflow);
        }
        warn!("{} controls do not fit in their containers", overflow);
    }

    write_report(&report, args.output.as_deref())?;
    if let Some(path) = &args.output {
        info!("Saved {}", path.display());
    }

    info!(
        "Arranged {} layouts with {} total controls",
        layouts.len(),
        layouts.iter().map(|l| l.manager.len()).sum::<usize>()
    );

    Ok(())
}

fn animate(args: &AnimateArgs) -> Result<()> {
    let loaded = LoadedConfig::<AnimationConfig>::load(&args.input)
        .with_context(|| format!("failed to load animation: {}", args.input.display()))?;
    let config = loaded.config;

    // CLI > config
    let steps = args.steps.unwrap_or(config.steps);
    let every = args.every.unwrap_or(config.every);

    let mut animator = RectAnimator::new();
    animator.start(config.start, config.end, steps);
    let report = AnimationReport::record(&mut animator, Throttle::new(every));

    write_report(&report, args.output.as_deref())?;
    if let Some(path) = &args.output {
        info!("Saved {}", path.display());
    }

    info!(
        "Emitted {} of {} frames",
        report.frame_count(),
        u64::from(animator.steps()) + 1
    );

    Ok(())
}

fn init(args: &InitArgs) -> Result<()> {
    if args.path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        );
    }

    save_config(&LayoutConfig::sample(), &args.path)?;
    info!("Wrote sample layout to {}", args.path.display());

    Ok(())
}
