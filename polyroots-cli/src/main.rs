//! CLI for closed-form linear and quadratic roots.
//!
//! Provides:
//! - A demo solving `x² + x - 12 = 0` and `x + 2 = 0`
//! - Ad-hoc `linear` / `quad` solves, as text or JSON

use clap::{Parser, Subcommand};
use log::{debug, info};
use polyroots_core::{parse_log_level, ComplexPair, Linear, Quadratic};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "polyroots")]
#[command(about = "Closed-form roots of linear and quadratic equations", long_about = None)]
struct Cli {
    /// Log level: error, warn, info, debug, or trace (default: $RUST_LOG, else info)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, PartialEq, Subcommand)]
enum Commands {
    /// Solve the sample equations x² + x - 12 = 0 and x + 2 = 0 (default)
    Demo,

    /// Solve ax + b = 0
    Linear {
        /// Linear term
        #[arg(short, default_value = "1.0", allow_negative_numbers = true)]
        a: f64,

        /// Constant term
        #[arg(short, default_value = "0.0", allow_negative_numbers = true)]
        b: f64,
    },

    /// Solve ax² + bx + c = 0
    Quad {
        /// Quadratic term
        #[arg(short, default_value = "1.0", allow_negative_numbers = true)]
        a: f64,

        /// Linear term
        #[arg(short, default_value = "2.0", allow_negative_numbers = true)]
        b: f64,

        /// Constant term
        #[arg(short, default_value = "0.0", allow_negative_numbers = true)]
        c: f64,
    },
}

#[derive(Serialize)]
struct LinearSolution {
    equation: Linear,
    root: f64,
}

#[derive(Serialize)]
struct QuadraticSolution {
    equation: Quadratic,
    roots: ComplexPair<f64>,
}

fn init_logs(level: Option<&str>) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if level.is_some() {
        builder.filter_level(parse_log_level(level)?);
    }
    builder.init();
    Ok(())
}

fn solve_linear(equation: Linear, json: bool) -> anyhow::Result<String> {
    let root = equation.root()?;
    debug!("{:?}: {}", equation, root);
    Ok(if json {
        serde_json::to_string(&LinearSolution { equation, root })?
    } else {
        format!("{:?}", root)
    })
}

fn solve_quadratic(equation: Quadratic, json: bool) -> anyhow::Result<String> {
    let roots = equation.roots()?;
    debug!("{:?}: discriminant {}", equation, equation.discriminant());
    Ok(if json {
        serde_json::to_string(&QuadraticSolution { equation, roots })?
    } else {
        let (r1, r2) = roots;
        format!("({}, {})", r1, r2)
    })
}

fn run(command: Commands, json: bool) -> anyhow::Result<Vec<String>> {
    match command {
        Commands::Demo => {
            info!("Solving sample equations");
            Ok(vec![
                solve_quadratic(Quadratic::new(1., 1., -12.), json)?,
                solve_linear(Linear::new(1., 2.), json)?,
            ])
        }
        Commands::Linear { a, b } => Ok(vec![ solve_linear(Linear::new(a, b), json)? ]),
        Commands::Quad { a, b, c } => Ok(vec![ solve_quadratic(Quadratic::new(a, b, c), json)? ]),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logs(cli.log_level.as_deref())?;
    for line in run(cli.command.unwrap_or(Commands::Demo), cli.json)? {
        println!("{}", line);
    }
    Ok(())
}
