use crate::graph::*;
use rand::{Rng, seq::index::sample};

pub trait RandomInstance: Sized {
    /// Generates a symmetric instance with zero diagonal where each distance between
    /// distinct cities is drawn uniformly from `1..=max_weight`
    fn random_symmetric<R: Rng>(rng: &mut R, n: NumNodes, max_weight: Weight) -> Self;

    /// Places `n` cities on distinct points of a `grid` × `grid` lattice and uses their
    /// Manhattan distances. The result satisfies the triangle inequality and all
    /// off-diagonal entries are positive.
    /// ** Panics if the lattice has less than `n` points **
    fn random_metric<R: Rng>(rng: &mut R, n: NumNodes, grid: u32) -> Self;
}

impl RandomInstance for DistanceMatrix {
    fn random_symmetric<R: Rng>(rng: &mut R, n: NumNodes, max_weight: Weight) -> Self {
        assert!(max_weight > 0);
        let mut result = Self::new(n);

        for u in 0..n {
            for v in u + 1..n {
                result.set_symmetric_weight(u, v, rng.gen_range(1..=max_weight));
            }
        }

        result
    }

    fn random_metric<R: Rng>(rng: &mut R, n: NumNodes, grid: u32) -> Self {
        let cells = (grid as usize) * (grid as usize);
        assert!(cells >= n as usize, "grid too small for {n} distinct cities");

        let points: Vec<(u32, u32)> = sample(rng, cells, n as usize)
            .into_iter()
            .map(|c| ((c / grid as usize) as u32, (c % grid as usize) as u32))
            .collect();

        let mut result = Self::new(n);
        for u in 0..n {
            for v in u + 1..n {
                let (ux, uy) = points[u as usize];
                let (vx, vy) = points[v as usize];
                result.set_symmetric_weight(u, v, ux.abs_diff(vx) + uy.abs_diff(vy));
            }
        }

        result
    }
}
