use std::path::PathBuf;

use ::log::{LevelFilter, info};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use salesman::{log::build_logger_for_verbosity, prelude::*};
use structopt::StructOpt;

/// Writes a random distance matrix in the input format of the tour solvers
#[derive(StructOpt)]
struct Opts {
    number_of_cities: NumNodes,

    /// Output file; stdout if omitted
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    #[structopt(short, long, default_value = "123")]
    seed: u64,

    /// Largest distance of a non-metric instance
    #[structopt(short, long, default_value = "100")]
    max_weight: Weight,

    /// Place the cities on a grid and use Manhattan distances (satisfies the triangle inequality)
    #[structopt(long)]
    metric: bool,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opts.verbose);

    anyhow::ensure!(opts.max_weight > 0, "max weight must be positive");

    let mut rng = Pcg64Mcg::seed_from_u64(opts.seed);
    let matrix = if opts.metric {
        // large enough to place every city on its own point
        let grid = ((opts.number_of_cities as f64).sqrt().ceil() as u32).max(1) * 4;
        DistanceMatrix::random_metric(&mut rng, opts.number_of_cities, grid)
    } else {
        DistanceMatrix::random_symmetric(&mut rng, opts.number_of_cities, opts.max_weight)
    };

    info!(
        "Generated {} instance with {} cities (seed {})",
        if opts.metric { "metric" } else { "random" },
        matrix.number_of_nodes(),
        opts.seed
    );

    if let Some(path) = &opts.output {
        matrix.try_write_matrix_file(path)?;
    } else {
        matrix.try_write_matrix(std::io::stdout().lock())?;
    }

    Ok(())
}
