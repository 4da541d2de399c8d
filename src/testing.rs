use super::graph::*;
use rand::Rng;

/// The classic four city instance; its optimal tour 0-1-3-2-0 costs 80
pub fn four_city_example() -> DistanceMatrix {
    DistanceMatrix::from_rows(vec![
        vec![0, 10, 15, 20],
        vec![10, 0, 35, 25],
        vec![15, 35, 0, 30],
        vec![20, 25, 30, 0],
    ])
}

/// City 0 is connected to every other city with weight 1 + index; all other entries are zero,
/// i.e. absent for the spanning tree builder.
pub fn star_instance(n: NumNodes) -> DistanceMatrix {
    let mut matrix = DistanceMatrix::new(n);
    for v in 1..n {
        matrix.set_symmetric_weight(0, v, 1 + v);
    }
    matrix
}

pub fn random_symmetric_matrices(
    rng: &mut impl Rng,
    n: NumNodes,
    max_weight: Weight,
) -> impl Iterator<Item = DistanceMatrix> + '_ {
    std::iter::repeat_with(move || DistanceMatrix::random_symmetric(rng, n, max_weight))
}

pub fn random_metric_matrices(
    rng: &mut impl Rng,
    n: NumNodes,
    grid: u32,
) -> impl Iterator<Item = DistanceMatrix> + '_ {
    std::iter::repeat_with(move || DistanceMatrix::random_metric(rng, n, grid))
}
