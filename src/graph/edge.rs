use super::*;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Edge(pub Node, pub Node);

impl Edge {
    /// Looks up the weight of the edge in `matrix`
    pub fn weight_in(&self, matrix: &DistanceMatrix) -> Weight {
        matrix.weight(self.0, self.1)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn weight_lookup() {
        let matrix = DistanceMatrix::from_rows(vec![vec![0, 7], vec![7, 0]]);
        assert_eq!(Edge(0, 1).weight_in(&matrix), 7);
        assert_eq!(Edge(1, 0).weight_in(&matrix), 7);
    }
}
