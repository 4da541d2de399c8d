use std::path::PathBuf;

use ::log::{LevelFilter, info, warn};
use anyhow::Context;
use salesman::{log::build_logger_for_verbosity, prelude::*};
use structopt::StructOpt;

/// Computes a tour with the double-tree heuristic
#[derive(StructOpt)]
struct Opts {
    /// Number of cities n; the input file has to provide n*n distances
    number_of_cities: NumNodes,

    /// Distance matrix as whitespace separated integers in row-major order
    #[structopt(parse(from_os_str))]
    input_file: PathBuf,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opts.verbose);

    let matrix = DistanceMatrix::try_read_matrix_file(&opts.input_file, opts.number_of_cities)
        .with_context(|| format!("Error loading input file {:?}", opts.input_file))?;

    if !matrix.is_symmetric() {
        warn!("Distance matrix is not symmetric");
    }
    if matrix.has_zero_off_diagonal() {
        warn!("Distance matrix contains zero distances; they are treated as missing edges");
    }

    let tour = double_tree_tour(&matrix)?;
    if let Err(e) = tour.is_correct_for(matrix.number_of_nodes()) {
        warn!("Heuristic tour is incomplete: {e}");
    }
    info!("Heuristic tour of cost {}", tour.cost());

    tour.try_write_tour(std::io::stdout().lock(), "heuristic")?;

    Ok(())
}
