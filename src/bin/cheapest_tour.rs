use std::{path::PathBuf, time::Duration};

use ::log::{LevelFilter, info, warn};
use anyhow::Context;
use salesman::{log::build_logger_for_verbosity, prelude::*};
use structopt::StructOpt;

/// Computes a minimum cost tour by exhaustive search
#[derive(StructOpt)]
struct Opts {
    /// Number of cities n; the input file has to provide n*n distances
    number_of_cities: NumNodes,

    /// Distance matrix as whitespace separated integers in row-major order
    #[structopt(parse(from_os_str))]
    input_file: PathBuf,

    /// Stop after this many seconds and report the best tour found so far
    #[structopt(short = "T", long)]
    timeout: Option<f64>,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opts.verbose);
    signal_handling::initialize();

    let matrix = DistanceMatrix::try_read_matrix_file(&opts.input_file, opts.number_of_cities)
        .with_context(|| format!("Error loading input file {:?}", opts.input_file))?;

    if !matrix.is_symmetric() {
        warn!("Distance matrix is not symmetric; only one direction of every cycle is evaluated");
    }

    let mut search = ExhaustiveSearch::new(&matrix)?;
    info!(
        "Start exhaustive search over {} permutations",
        search.number_of_permutations()
    );

    if let Some(seconds) = opts.timeout {
        search.run_until_timeout(Duration::from_secs_f64(seconds));
    } else {
        search.run_to_completion();
    }

    if !search.is_completed() {
        warn!(
            "Search interrupted after {} of {} permutations; the tour below is not proven optimal",
            search.number_of_evaluated_permutations(),
            search.number_of_permutations()
        );
    }

    info!(
        "Evaluated {} permutations",
        search.number_of_evaluated_permutations()
    );

    let tour = search.into_result()?;
    tour.try_write_tour(std::io::stdout().lock(), "optimal")?;

    Ok(())
}
