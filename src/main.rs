//! Schemefit - maximum-scale placement for circuit schemes
//!
//! # Usage
//!
//! ```bash
//! schemefit solve constraints.fit --center
//! schemefit fit bridge.fit --width 640 --height 480
//! schemefit stress --constraints 1000 --runs 100
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use scheme_fit::{
    dsl,
    error::{FitError, Result},
    scheme::{fit_scheme, Canvas},
    solver::{dx_interval, dx_interval_mid, Constraint, FitSolver, ScaleFit},
};

/// Maximum-scale placement for circuit schemes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve the constraint lines of a description file
    Solve {
        /// Path to the description file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Verification tolerance (overrides the file's .tolerance)
        #[arg(short, long)]
        tolerance: Option<f64>,

        /// Also print the centered offset and the offset interval
        #[arg(short, long)]
        center: bool,
    },

    /// Fit the scheme elements of a description file into a canvas
    Fit {
        /// Path to the description file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Canvas width in pixels (overrides the file's .canvas)
        #[arg(long)]
        width: Option<f64>,

        /// Canvas height in pixels (overrides the file's .canvas)
        #[arg(long)]
        height: Option<f64>,

        /// Blank border in pixels (overrides the file's .margin)
        #[arg(short, long)]
        margin: Option<f64>,
    },

    /// Solve random constraint sets and verify every result
    Stress {
        /// Constraints per set
        #[arg(short = 'n', long, default_value_t = 1000)]
        constraints: usize,

        /// Number of sets
        #[arg(short, long, default_value_t = 100)]
        runs: usize,

        /// Random seed
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Solve {
            file,
            tolerance,
            center,
        } => run_solve(&file, tolerance, center),
        Command::Fit {
            file,
            width,
            height,
            margin,
        } => run_fit(&file, width, height, margin),
        Command::Stress {
            constraints,
            runs,
            seed,
        } => run_stress(constraints, runs, seed),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_solve(file: &Path, tolerance: Option<f64>, center: bool) -> Result<()> {
    let doc = dsl::parse_file(file)?;
    let mut config = doc.solver_config();
    if let Some(tolerance) = tolerance {
        config = config.with_tolerance(tolerance);
    }

    if doc.constraints.is_empty() {
        warn!(path = %file.display(), "file has no constraint lines");
    }

    match FitSolver::with_config(config).solve(&doc.constraints)? {
        ScaleFit::Infeasible => println!("infeasible"),
        ScaleFit::Unbounded => println!("unbounded"),
        ScaleFit::Bounded { scale, offset } => {
            println!("scale={} offset={}", scale, offset);
            if center {
                let (lo, hi) = dx_interval(&doc.constraints, scale);
                println!("interval=[{}, {}]", lo, hi);
                println!("center={}", dx_interval_mid(&doc.constraints, scale));
            }
        }
    }
    Ok(())
}

fn run_fit(
    file: &Path,
    width: Option<f64>,
    height: Option<f64>,
    margin: Option<f64>,
) -> Result<()> {
    let doc = dsl::parse_file(file)?;
    let default = doc.canvas_or_default();
    let canvas = Canvas::new(width.unwrap_or(default.width), height.unwrap_or(default.height));
    let mut config = doc.fit_config();
    if let Some(margin) = margin {
        config = config.with_margin(margin);
    }

    let placement = fit_scheme(&doc.scheme, canvas, &config)?;
    let tr = placement.transform;
    println!(
        "scale={} x_shift={} y_shift={} (x limit {}, y limit {})",
        tr.scale, tr.x_shift, tr.y_shift, placement.scale_x, placement.scale_y
    );
    for element in doc.scheme.elements() {
        let placed: Vec<String> = element
            .anchors(&config.style)
            .iter()
            .map(|anchor| placement.place(anchor.point).to_string())
            .collect();
        println!("{} {}", element.kind(), placed.join(" "));
    }
    Ok(())
}

fn random_constraint(rng: &mut StdRng) -> Constraint {
    Constraint::new(
        rng.gen_range(-10.0..10.0),
        rng.gen_range(-100.0..0.0),
        1000.0 + rng.gen_range(-100.0..0.0),
    )
}

fn run_stress(constraints: usize, runs: usize, seed: Option<u64>) -> Result<()> {
    if constraints == 0 {
        return Err(FitError::invalid_parameter("constraints", "must be positive"));
    }
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let solver = FitSolver::new();
    info!(seed, constraints, runs, "starting stress run");

    let start = Instant::now();
    for run in 0..runs {
        let set: Vec<Constraint> = (0..constraints).map(|_| random_constraint(&mut rng)).collect();
        // Random sets are feasible at s = 0; verification errors propagate.
        if let ScaleFit::Bounded { scale, offset } = solver.solve(&set)? {
            let (lo, hi) = dx_interval(&set, scale);
            if (hi - lo).abs() > 1e-9 {
                warn!(run, scale, offset, width = hi - lo, "result is not on the feasibility boundary");
            }
        }
    }
    println!("seed={} runs={} time elapsed {:.3?}", seed, runs, start.elapsed());
    Ok(())
}
