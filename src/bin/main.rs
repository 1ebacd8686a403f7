use std::error::Error;
use std::io;
use std::io::Write;
use std::path::PathBuf;
use std::process::exit;

use clap::{ArgAction, Parser};
use owo_colors::OwoColorize;
use relp_num::RationalBig;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use exact_tableau::algorithm::simplex::{Simplex, State};
use exact_tableau::data::tableau::Tableau;
use exact_tableau::io::{builtin_example, import};
use exact_tableau::render::{RenderOptions, TextRenderer};

/// Solve a linear program in tableau form with the primal simplex method, in exact arithmetic.
///
/// Every tableau is printed, with the pivot highlighted.
#[derive(Parser, Debug)]
#[command(name = "exact-tableau", version, about)]
struct Opts {
    /// File containing the starting tableau, one row per line. Solves a built-in example if omitted.
    #[arg(value_name = "FILE")]
    problem_file: Option<PathBuf>,

    /// Fail if the method has not terminated after this many steps
    #[arg(short, long, value_name = "N")]
    max_iterations: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Print the values of the decision variables at the optimum
    #[arg(short, long)]
    solution: bool,

    /// Increase logging verbosity, can be repeated
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let opts = Opts::parse();

    let level = match opts.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_ansi(!opts.no_color)
        .finish();
    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", error);
        exit(1);
    }

    if let Err(error) = run(&opts) {
        if opts.no_color {
            eprintln!("error: {}", error);
        } else {
            eprintln!("{} {}", "error:".red().bold(), error);
        }
        exit(1);
    }
}

fn run(opts: &Opts) -> Result<(), Box<dyn Error>> {
    let tableau: Tableau<RationalBig> = match &opts.problem_file {
        Some(path) => import(path)?,
        None => builtin_example(),
    };

    let mut renderer = TextRenderer::new(io::stdout().lock(), RenderOptions { color: !opts.no_color });
    let mut simplex = Simplex::new(tableau);

    let mut nr_steps = 0;
    while simplex.state() == State::Running {
        if opts.max_iterations.is_some_and(|max| nr_steps >= max) {
            return Err(format!(
                "no termination after {} steps ({} pivots)", nr_steps, simplex.nr_iterations(),
            ).into());
        }
        simplex.step(&mut renderer)?;
        nr_steps += 1;
    }
    if let Some(error) = renderer.error() {
        return Err(format!("could not write tableau: {}", error).into());
    }

    let mut output = renderer.into_inner();
    match simplex.state() {
        State::Infeasible => writeln!(output, "NO SOLUTION FOUND")?,
        _ if opts.solution => {
            if let Some(solution) = simplex.into_result().and_then(|result| result.solution()) {
                writeln!(output, "{}", solution)?;
            }
        },
        _ => {},
    }

    Ok(())
}
