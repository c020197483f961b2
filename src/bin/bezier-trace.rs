use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bezier-trace", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate the curve once and print the construction as JSON.
    Eval(EvalArgs),
    /// Animate a full run and print the traced curve as JSON.
    Animate(AnimateArgs),
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Control points as whitespace separated `x,y` pairs.
    #[arg(long)]
    points: bezier_trace::ControlPointSet,

    /// Curve parameter; values outside [0, 1] extrapolate.
    #[arg(long, allow_negative_numbers = true)]
    t: f64,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    /// Control points as whitespace separated `x,y` pairs.
    #[arg(long)]
    points: bezier_trace::ControlPointSet,

    /// Start and end point (`x,y x,y`); placed before the control points.
    #[arg(long)]
    path: Option<bezier_trace::ControlPointSet>,

    /// Driver config JSON. `require_path_endpoints` is overridden by whether `--path` is given.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the number of steps per run.
    #[arg(long)]
    resolution: Option<u32>,

    /// Wait the configured frame interval between ticks instead of simulating time.
    #[arg(long)]
    realtime: bool,

    /// Print every frame as a JSON line before the final trace.
    #[arg(long)]
    frames: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Eval(args) => cmd_eval(args),
        Command::Animate(args) => cmd_animate(args),
    }
}

fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    let hierarchy = bezier_trace::evaluate(args.points.as_slice(), args.t);
    if hierarchy.is_empty() {
        eprintln!("fewer than two points: nothing to draw");
    }
    print_json(&hierarchy, args.pretty)
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let mut cfg = match &args.config {
        Some(path) => bezier_trace::DriverConfig::from_path(path)?,
        None if args.path.is_some() => bezier_trace::DriverConfig::path_and_control_points(),
        None => bezier_trace::DriverConfig::control_points_only(),
    };
    if let Some(steps) = args.resolution {
        cfg = cfg.with_resolution(bezier_trace::Resolution::new(steps)?);
    }
    // `--path` alone decides the layout; `--points` are always control points.
    cfg.require_path_endpoints = args.path.is_some();

    let mut driver = bezier_trace::AnimationDriver::new(cfg)?;
    if let Some(path) = &args.path {
        anyhow::ensure!(path.len() == 2, "--path takes exactly two points");
        for &p in path.as_slice() {
            driver.place_point(p);
        }
    }
    for &p in args.points.as_slice() {
        driver.place_point(p);
    }

    anyhow::ensure!(
        driver.run(),
        "need at least {} points in total to animate",
        bezier_trace::MIN_RUN_POINTS
    );

    let ticks = if args.frames {
        let stdout = std::io::stdout();
        let mut sink = bezier_trace::JsonLinesSink::new(stdout.lock());
        run_to_end(&mut driver, args.realtime, &mut sink)?
    } else {
        run_to_end(&mut driver, args.realtime, &mut bezier_trace::NullSink)?
    };
    eprintln!("traced {ticks} frames");

    print_json(driver.trace(), false)
}

fn run_to_end(
    driver: &mut bezier_trace::AnimationDriver,
    realtime: bool,
    sink: &mut impl bezier_trace::FrameSink,
) -> anyhow::Result<u64> {
    let ticks = if realtime {
        bezier_trace::drive(driver, &mut bezier_trace::SystemClock, sink)
    } else {
        bezier_trace::drive(driver, &mut bezier_trace::ManualClock::new(), sink)
    };
    ticks.context("animate curve")
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let written = if pretty {
        serde_json::to_writer_pretty(&mut out, value)
    } else {
        serde_json::to_writer(&mut out, value)
    };
    written.context("serialize output")?;
    writeln!(out).context("write output")?;
    Ok(())
}
